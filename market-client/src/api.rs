//! Backend gateways
//!
//! Each trait covers one remote collaborator so services and tests can swap
//! in fakes. [`MarketApi`] implements all of them over an [`HttpClient`].

use crate::client::{HttpClient, NetworkHttpClient};
use crate::ClientResult;
use async_trait::async_trait;
use serde::Deserialize;
use shared::models::{
    CartEntry, CartRecord, ForumThread, Item, LikeReceipt, NewItem, NewReply, Reply,
};
use shared::{CartId, ForumId, ItemId, UserId};

#[async_trait]
pub trait CartGateway: Send + Sync {
    /// Store a cart entry, returning the id of the created record
    async fn persist_cart(&self, entry: &CartEntry) -> ClientResult<CartId>;
}

#[async_trait]
pub trait LikeGateway: Send + Sync {
    /// Toggle the caller's like on a thread, returning the authoritative count
    async fn confirm_like(&self, forum_id: &ForumId) -> ClientResult<LikeReceipt>;
}

#[async_trait]
pub trait ReplyGateway: Send + Sync {
    async fn submit_reply(&self, reply: &NewReply) -> ClientResult<Reply>;
}

#[async_trait]
pub trait ForumGateway: Send + Sync {
    async fn list_forums(&self) -> ClientResult<Vec<ForumThread>>;
    async fn fetch_forum(&self, forum_id: &ForumId) -> ClientResult<ForumThread>;
}

#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn create_item(&self, draft: &NewItem) -> ClientResult<Item>;
    async fn fetch_item(&self, item_id: &ItemId) -> ClientResult<Item>;
}

/// Like endpoint response
///
/// Newer backends answer with the count, older ones with the updated thread.
#[derive(Deserialize)]
#[serde(untagged)]
enum LikeResponse {
    Count { count: u64 },
    Thread { likes: Vec<UserId> },
}

impl From<LikeResponse> for LikeReceipt {
    fn from(resp: LikeResponse) -> Self {
        let count = match resp {
            LikeResponse::Count { count } => count,
            LikeResponse::Thread { likes } => likes.len() as u64,
        };
        LikeReceipt { count }
    }
}

/// REST implementation of every gateway
#[derive(Debug, Clone)]
pub struct MarketApi<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> MarketApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Use `token` for every later call, e.g. after sign-in
    pub fn set_token(&self, token: Option<String>) {
        self.http.set_token(token);
    }
}

#[async_trait]
impl<H: HttpClient> CartGateway for MarketApi<H> {
    async fn persist_cart(&self, entry: &CartEntry) -> ClientResult<CartId> {
        let record: CartRecord = self.http.post("cart", entry).await?;
        Ok(record.id)
    }
}

#[async_trait]
impl<H: HttpClient> LikeGateway for MarketApi<H> {
    async fn confirm_like(&self, forum_id: &ForumId) -> ClientResult<LikeReceipt> {
        let path = format!("forum/{}/likeForum", forum_id);
        let resp: LikeResponse = self.http.patch(&path, &serde_json::json!({})).await?;
        Ok(resp.into())
    }
}

#[async_trait]
impl<H: HttpClient> ReplyGateway for MarketApi<H> {
    async fn submit_reply(&self, reply: &NewReply) -> ClientResult<Reply> {
        self.http.post("reply", reply).await
    }
}

#[async_trait]
impl<H: HttpClient> ForumGateway for MarketApi<H> {
    async fn list_forums(&self) -> ClientResult<Vec<ForumThread>> {
        self.http.get("forum").await
    }

    async fn fetch_forum(&self, forum_id: &ForumId) -> ClientResult<ForumThread> {
        self.http.get(&format!("forum/{}", forum_id)).await
    }
}

#[async_trait]
impl<H: HttpClient> CatalogGateway for MarketApi<H> {
    async fn create_item(&self, draft: &NewItem) -> ClientResult<Item> {
        self.http.post("item", draft).await
    }

    async fn fetch_item(&self, item_id: &ItemId) -> ClientResult<Item> {
        self.http.get(&format!("item/{}", item_id)).await
    }
}
