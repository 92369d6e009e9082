//! Forum threads and replies

use super::validation_error;
use crate::api::{ForumGateway, ReplyGateway};
use crate::session::{Identity, Session};
use market_core::{EngagementTracker, MarketError, MarketResult, Notice};
use shared::ForumId;
use shared::models::{ForumThread, NewReply, Reply};
use std::sync::Arc;
use validator::Validate;

/// Successful reply submission
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyOutcome {
    pub reply: Reply,
    /// Thread as refetched after the reply, `None` when the refetch failed
    pub thread: Option<ForumThread>,
    pub notice: Notice,
}

/// Loads threads and posts replies
///
/// Every thread it fetches seeds the shared [`EngagementTracker`] with the
/// viewer's like state.
pub struct ForumService<G, I = Session> {
    gateway: G,
    identity: Arc<I>,
    tracker: Arc<EngagementTracker>,
}

impl<G, I> ForumService<G, I>
where
    G: ForumGateway + ReplyGateway,
    I: Identity,
{
    pub fn new(gateway: G, identity: Arc<I>, tracker: Arc<EngagementTracker>) -> Self {
        Self {
            gateway,
            identity,
            tracker,
        }
    }

    fn track(&self, thread: &ForumThread) {
        let viewer = self.identity.current_user().map(|u| u.id);
        self.tracker
            .load(thread.id.clone(), thread.engagement_for(viewer.as_ref()));
    }

    pub async fn list_forums(&self) -> MarketResult<Vec<ForumThread>> {
        let threads = self.gateway.list_forums().await?;
        for thread in &threads {
            self.track(thread);
        }
        tracing::debug!(count = threads.len(), "Loaded forum list");
        Ok(threads)
    }

    pub async fn open_thread(&self, forum_id: &ForumId) -> MarketResult<ForumThread> {
        let thread = self.gateway.fetch_forum(forum_id).await?;
        self.track(&thread);
        Ok(thread)
    }

    /// Post a reply, then refresh the thread
    ///
    /// A failed refresh after a successful post is logged only.
    pub async fn submit_reply(
        &self,
        forum_id: &ForumId,
        content: impl Into<String>,
    ) -> MarketResult<ReplyOutcome> {
        let user = self
            .identity
            .current_user()
            .ok_or(MarketError::AuthenticationRequired)?;

        let draft = NewReply {
            content: content.into(),
            user_id: user.id.clone(),
            forum_id: forum_id.clone(),
        };
        draft.validate().map_err(validation_error)?;

        let reply = self.gateway.submit_reply(&draft).await.map_err(|e| {
            tracing::warn!(forum_id = %forum_id, error = %e, "Failed to post reply");
            MarketError::from(e)
        })?;
        tracing::info!(forum_id = %forum_id, user_id = %user.id, reply_id = %reply.id, "Reply posted");

        let thread = match self.gateway.fetch_forum(forum_id).await {
            Ok(thread) => {
                self.track(&thread);
                Some(thread)
            }
            Err(e) => {
                tracing::warn!(forum_id = %forum_id, error = %e, "Failed to refresh thread after reply");
                None
            }
        };

        Ok(ReplyOutcome {
            reply,
            thread,
            notice: Notice::reply_posted(),
        })
    }
}
