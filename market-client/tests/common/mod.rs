// market-client/tests/common/mod.rs
// In-memory backend shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use market_client::api::{CartGateway, CatalogGateway, ForumGateway, LikeGateway, ReplyGateway};
use market_client::{ClientError, ClientResult, Session};
use rust_decimal::Decimal;
use shared::client::UserInfo;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    Author, CartEntry, ForumThread, Item, LikeReceipt, NewItem, NewReply, Reply,
};
use shared::{CartId, ForumId, ItemId, UserId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn ada() -> UserInfo {
    UserInfo::new("u1", "Ada")
}

pub fn signed_in() -> Arc<Session> {
    Arc::new(Session::signed_in(ada()))
}

pub fn item(id: &str, price: Decimal) -> Item {
    Item {
        id: ItemId::from(id),
        title: format!("Tour {id}"),
        category: "tour".into(),
        price,
        available_dates: Default::default(),
    }
}

pub fn thread(id: &str, likes: &[&str]) -> ForumThread {
    ForumThread {
        id: ForumId::from(id),
        title: "Best time to visit?".into(),
        content: "Planning a trip next spring".into(),
        author: Author {
            id: Some(UserId::from("u9")),
            name: "Grace".into(),
        },
        likes: likes.iter().map(|l| UserId::from(*l)).collect(),
        replies: Vec::new(),
        reply_count: 0,
        created_at: Utc::now(),
    }
}

#[derive(Default)]
struct State {
    carts: Vec<CartEntry>,
    forums: HashMap<ForumId, ForumThread>,
    items: HashMap<ItemId, Item>,
    fail_writes: Option<String>,
    fail_reads: bool,
}

/// Backend fake acting as the viewer `u1`
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forum(self, thread: ForumThread) -> Self {
        self.state
            .lock()
            .unwrap()
            .forums
            .insert(thread.id.clone(), thread);
        self
    }

    pub fn with_item(self, item: Item) -> Self {
        self.state
            .lock()
            .unwrap()
            .items
            .insert(item.id.clone(), item);
        self
    }

    /// Make every write fail with an API error carrying `message`
    pub fn fail_writes(&self, message: &str) {
        self.state.lock().unwrap().fail_writes = Some(message.to_string());
    }

    pub fn heal(&self) {
        let mut state = self.state.lock().unwrap();
        state.fail_writes = None;
        state.fail_reads = false;
    }

    pub fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }

    pub fn carts(&self) -> Vec<CartEntry> {
        self.state.lock().unwrap().carts.clone()
    }

    pub fn forum(&self, id: &str) -> Option<ForumThread> {
        self.state
            .lock()
            .unwrap()
            .forums
            .get(&ForumId::from(id))
            .cloned()
    }

    fn check_write(&self) -> ClientResult<()> {
        match &self.state.lock().unwrap().fail_writes {
            Some(message) => Err(ClientError::Api(AppError::with_message(
                ErrorCode::RemoteFailure,
                message.clone(),
            ))),
            None => Ok(()),
        }
    }

    fn check_read(&self) -> ClientResult<()> {
        if self.state.lock().unwrap().fail_reads {
            return Err(ClientError::Internal("Server unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CartGateway for FakeBackend {
    async fn persist_cart(&self, entry: &CartEntry) -> ClientResult<CartId> {
        self.check_write()?;
        let mut state = self.state.lock().unwrap();
        state.carts.push(entry.clone());
        Ok(CartId::from(format!("cart-{}", state.carts.len())))
    }
}

#[async_trait]
impl LikeGateway for FakeBackend {
    async fn confirm_like(&self, forum_id: &ForumId) -> ClientResult<LikeReceipt> {
        self.check_write()?;
        let viewer = ada().id;
        let mut state = self.state.lock().unwrap();
        let thread = state
            .forums
            .get_mut(forum_id)
            .ok_or_else(|| ClientError::NotFound(format!("forum {forum_id}")))?;
        if let Some(pos) = thread.likes.iter().position(|u| *u == viewer) {
            thread.likes.remove(pos);
        } else {
            thread.likes.push(viewer);
        }
        Ok(LikeReceipt {
            count: thread.likes.len() as u64,
        })
    }
}

#[async_trait]
impl ReplyGateway for FakeBackend {
    async fn submit_reply(&self, reply: &NewReply) -> ClientResult<Reply> {
        self.check_write()?;
        let mut state = self.state.lock().unwrap();
        let thread = state
            .forums
            .get_mut(&reply.forum_id)
            .ok_or_else(|| ClientError::NotFound(format!("forum {}", reply.forum_id)))?;
        let created = Reply {
            id: format!("r{}", thread.replies.len() + 1),
            content: reply.content.clone(),
            author: Some(Author {
                id: Some(reply.user_id.clone()),
                name: "Ada".into(),
            }),
            created_at: Some(Utc::now()),
        };
        thread.replies.push(created.clone());
        thread.reply_count += 1;
        Ok(created)
    }
}

#[async_trait]
impl ForumGateway for FakeBackend {
    async fn list_forums(&self) -> ClientResult<Vec<ForumThread>> {
        self.check_read()?;
        let mut forums: Vec<_> = self.state.lock().unwrap().forums.values().cloned().collect();
        forums.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(forums)
    }

    async fn fetch_forum(&self, forum_id: &ForumId) -> ClientResult<ForumThread> {
        self.check_read()?;
        self.state
            .lock()
            .unwrap()
            .forums
            .get(forum_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("forum {forum_id}")))
    }
}

#[async_trait]
impl CatalogGateway for FakeBackend {
    async fn create_item(&self, draft: &NewItem) -> ClientResult<Item> {
        self.check_write()?;
        let mut state = self.state.lock().unwrap();
        let item = Item {
            id: ItemId::from(format!("item-{}", state.items.len() + 1)),
            title: draft.title.clone(),
            category: draft.category.clone(),
            price: draft.price,
            available_dates: draft.available_dates.clone(),
        };
        state.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn fetch_item(&self, item_id: &ItemId) -> ClientResult<Item> {
        self.check_read()?;
        self.state
            .lock()
            .unwrap()
            .items
            .get(item_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("item {item_id}")))
    }
}

/// Cart gateway that yields to the scheduler before persisting
#[derive(Clone, Default)]
pub struct YieldingCart(pub FakeBackend);

#[async_trait]
impl CartGateway for YieldingCart {
    async fn persist_cart(&self, entry: &CartEntry) -> ClientResult<CartId> {
        tokio::task::yield_now().await;
        self.0.persist_cart(entry).await
    }
}

/// Like gateway that holds each call until released
#[derive(Clone, Default)]
pub struct GatedLike {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
    pub count: u64,
}

impl GatedLike {
    pub fn answering(count: u64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

#[async_trait]
impl LikeGateway for GatedLike {
    async fn confirm_like(&self, _forum_id: &ForumId) -> ClientResult<LikeReceipt> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(LikeReceipt { count: self.count })
    }
}
