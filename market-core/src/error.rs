//! Core error taxonomy

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Every way a booking, cart or engagement action can be blocked
#[derive(Debug, Clone, Error)]
pub enum MarketError {
    /// Party has no adult
    #[error("invalid party composition: at least one adult is required")]
    InvalidComposition,

    /// Unit price below zero
    #[error("invalid price: {0} is negative")]
    InvalidPrice(rust_decimal::Decimal),

    /// Item already present in the cart
    #[error("item {0} is already in the cart")]
    DuplicateItem(shared::ItemId),

    /// No booking date selected
    #[error("no booking date selected")]
    MissingDate,

    /// A like confirmation for this entity is still outstanding
    #[error("like toggle already in progress")]
    ToggleInProgress,

    /// No signed-in user
    #[error("authentication required")]
    AuthenticationRequired,

    /// Form input rejected before submission
    #[error("validation failed: {0}")]
    Validation(String),

    /// Remote collaborator failed
    #[error("remote failure: {0}")]
    RemoteFailure(String),
}

impl MarketError {
    pub fn remote(cause: impl std::fmt::Display) -> Self {
        Self::RemoteFailure(cause.to_string())
    }

    /// Stable numeric code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidComposition => ErrorCode::InvalidComposition,
            Self::InvalidPrice(_) => ErrorCode::InvalidPrice,
            Self::DuplicateItem(_) => ErrorCode::ItemAlreadyInCart,
            Self::MissingDate => ErrorCode::MissingDate,
            Self::ToggleInProgress => ErrorCode::ToggleInProgress,
            Self::AuthenticationRequired => ErrorCode::NotAuthenticated,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::RemoteFailure(_) => ErrorCode::RemoteFailure,
        }
    }

    /// Detected without contacting the backend
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::RemoteFailure(_))
    }

    /// Only a failed remote call has optimistic state to undo
    pub fn requires_rollback(&self) -> bool {
        matches!(self, Self::RemoteFailure(_))
    }
}

impl From<MarketError> for AppError {
    fn from(err: MarketError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Result type for core operations
pub type MarketResult<T> = Result<T, MarketError>;
