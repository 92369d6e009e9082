//! User-facing types shared between the backend and the client

use crate::types::{ItemId, UserId};
use serde::{Deserialize, Serialize};

/// Signed-in user as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id", alias = "id")]
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Items already in the user's cart at sign-in time
    #[serde(default)]
    pub cart: Vec<ItemId>,
}

impl UserInfo {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            cart: Vec::new(),
        }
    }
}
