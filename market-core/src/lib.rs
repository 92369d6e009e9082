//! Booking & Engagement core
//!
//! Pure, synchronous building blocks behind the marketplace client:
//!
//! - **pricing**: booking totals from a unit price and a party composition
//! - **cart**: the cart membership guard (one entry per item)
//! - **engagement**: optimistic like/unlike with exact rollback
//! - **notice**: user-facing notifications for every blocking error
//!
//! Nothing here performs I/O. Remote persistence lives in `market-client`.

pub mod cart;
pub mod engagement;
pub mod error;
pub mod money;
pub mod notice;
pub mod pricing;

pub use cart::{CartDecision, RejectReason, can_add};
pub use engagement::{
    ConfirmationRequest, EngagementCounter, EngagementTracker, LikeIntent, LikePhase,
    toggle_like,
};
pub use error::{MarketError, MarketResult};
pub use notice::{Notice, NoticeVariant};
pub use pricing::{PriceQuote, compute_total};
