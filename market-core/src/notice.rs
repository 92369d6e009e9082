//! Transient user notifications
//!
//! Every blocking error has a notice with a human-readable title. The one
//! exception is `ToggleInProgress`, which the UI drops silently.

use crate::error::MarketError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// Toast shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn item_added() -> Self {
        Self::info("Item added to cart", "Item added to cart successfully")
    }

    pub fn item_created() -> Self {
        Self::info(
            "Item created successfully",
            "You have successfully created a new item",
        )
    }

    pub fn reply_posted() -> Self {
        Self::info("Comment posted", "Your comment was added to the thread")
    }

    /// Notice for a blocking error, `None` for errors the UI ignores
    pub fn for_error(err: &MarketError) -> Option<Self> {
        let notice = match err {
            MarketError::ToggleInProgress => return None,
            MarketError::MissingDate => {
                Self::info("Please select a date", "Please select a date to continue")
            }
            MarketError::DuplicateItem(_) => {
                Self::destructive("Item already in cart", "This item is already in cart")
            }
            MarketError::InvalidComposition => Self::destructive(
                "Please add an adult",
                "Every booking needs at least one adult",
            ),
            MarketError::InvalidPrice(_) => Self::destructive(
                "Invalid price",
                "This item has an invalid price and cannot be booked",
            ),
            MarketError::AuthenticationRequired => {
                Self::destructive("Please login", "You need to login to continue")
            }
            MarketError::Validation(msg) => Self::destructive("Please check your input", msg.clone()),
            MarketError::RemoteFailure(cause) => Self::destructive(cause.clone(), "Something went wrong"),
        };
        Some(notice)
    }

    /// Like [`for_error`](Self::for_error) with a context-specific login prompt
    pub fn for_action(err: &MarketError, action: &str) -> Option<Self> {
        match err {
            MarketError::AuthenticationRequired => Some(Self::destructive(
                format!("Please login to {action}"),
                format!("You need to login to leave a {action}"),
            )),
            other => Self::for_error(other),
        }
    }
}
