//! Shared types for the marketplace client
//!
//! Wire models, identifiers and error codes used by
//! both the pure booking core and the REST client.

pub mod client;
pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use types::{CartId, ForumId, ItemId, UserId};
