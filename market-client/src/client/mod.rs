//! HTTP transport

pub mod http;

pub use http::{HttpClient, NetworkHttpClient};
