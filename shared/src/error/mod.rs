//! Unified error system for the marketplace client
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Error body with code, message, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Booking and cart errors
//! - 5xxx: Engagement errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::ItemAlreadyInCart, "Item already in cart");
//! assert_eq!(err.code.code(), 4004);
//!
//! let body: AppError = serde_json::from_str(r#"{"message":"Server busy"}"#).unwrap();
//! assert_eq!(body.code, ErrorCode::Unknown);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;
