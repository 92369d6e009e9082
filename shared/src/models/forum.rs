//! Forum Model

use super::engagement::EngagementState;
use crate::types::{ForumId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Minimum reply length accepted by the comment form
pub const MIN_REPLY_LEN: u64 = 8;

/// Author reference as populated by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
}

/// Discussion thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumThread {
    #[serde(rename = "_id", alias = "id")]
    pub id: ForumId,
    pub title: String,
    pub content: String,
    #[serde(rename = "userId")]
    pub author: Author,
    /// Users who liked the thread
    #[serde(default)]
    pub likes: Vec<UserId>,
    /// Empty in listings, populated by the detail endpoint
    #[serde(default)]
    pub replies: Vec<Reply>,
    #[serde(default)]
    pub reply_count: u32,
    pub created_at: DateTime<Utc>,
}

impl ForumThread {
    /// Like state for `viewer`, derived from the authoritative likers list
    pub fn engagement_for(&self, viewer: Option<&UserId>) -> EngagementState {
        EngagementState::from_likes(&self.likes, viewer)
    }
}

/// Reply in a thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub content: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Reply submission body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReply {
    #[validate(length(min = 8, message = "Reply must be at least 8 characters"))]
    pub content: String,
    pub user_id: UserId,
    pub forum_id: ForumId,
}
