//! Engagement (likes) Model

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Like state of one entity as seen by the viewing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EngagementState {
    pub liked: bool,
    pub count: u64,
}

impl EngagementState {
    pub const fn new(liked: bool, count: u64) -> Self {
        Self { liked, count }
    }

    /// Derive the state from the authoritative list of likers
    pub fn from_likes(likes: &[UserId], viewer: Option<&UserId>) -> Self {
        Self {
            liked: viewer.is_some_and(|v| likes.contains(v)),
            count: likes.len() as u64,
        }
    }
}

/// Authoritative like count echoed by the backend after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeReceipt {
    pub count: u64,
}
