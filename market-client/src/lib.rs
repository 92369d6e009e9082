//! Market Client - REST client and session services for the marketplace
//!
//! Wires the pure booking core (`market-core`) to the backend:
//!
//! - [`BookingService`]: price, guard and persist a cart entry
//! - [`EngagementService`]: optimistic likes with rollback
//! - [`ForumService`]: threads and replies
//! - [`CatalogService`]: item lookup and listing creation
//!
//! Every service reads the signed-in user from a shared [`Session`] and
//! talks to the backend through the gateway traits in [`api`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod services;
pub mod session;

pub use api::{CartGateway, CatalogGateway, ForumGateway, LikeGateway, MarketApi, ReplyGateway};
pub use client::{HttpClient, NetworkHttpClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use services::{
    BookingForm, BookingService, CartOutcome, CatalogService, EngagementService, ForumService,
    ReplyOutcome,
};
pub use session::{CartReservation, Identity, Session};

// Re-export core types for convenience
pub use market_core::{MarketError, MarketResult, Notice, NoticeVariant};
