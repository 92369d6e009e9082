//! Session services
//!
//! Each service guards its action locally (user, validation, pending state)
//! before touching the network, and converts every transport failure into
//! `MarketError::RemoteFailure`.

mod booking;
mod catalog;
mod engagement;
mod forum;

pub use booking::{BookingForm, BookingService, CartOutcome};
pub use catalog::CatalogService;
pub use engagement::EngagementService;
pub use forum::{ForumService, ReplyOutcome};

use market_core::MarketError;
use validator::ValidationErrors;

fn validation_error(errors: ValidationErrors) -> MarketError {
    MarketError::Validation(errors.to_string())
}
