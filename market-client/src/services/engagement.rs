//! Optimistic likes with rollback

use crate::api::LikeGateway;
use crate::session::{Identity, Session};
use market_core::{EngagementTracker, MarketError, MarketResult};
use shared::ForumId;
use shared::models::EngagementState;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Drives like toggles against the backend
pub struct EngagementService<G, I = Session> {
    gateway: G,
    identity: Arc<I>,
    tracker: Arc<EngagementTracker>,
}

impl<G, I> EngagementService<G, I>
where
    G: LikeGateway,
    I: Identity,
{
    pub fn new(gateway: G, identity: Arc<I>, tracker: Arc<EngagementTracker>) -> Self {
        Self {
            gateway,
            identity,
            tracker,
        }
    }

    pub fn tracker(&self) -> &Arc<EngagementTracker> {
        &self.tracker
    }

    /// State to render for a thread
    pub fn state(&self, forum_id: &ForumId) -> Option<EngagementState> {
        self.tracker.state(forum_id)
    }

    /// Toggle the viewer's like on a thread
    ///
    /// The optimistic state is visible through [`state`](Self::state) while
    /// the request is in flight. Returns the settled state, or `None` when
    /// `cancel` fired first. A cancelled toggle restores the pre-toggle state
    /// in the shared tracker and never applies the late result.
    pub async fn toggle_like(
        &self,
        forum_id: &ForumId,
        cancel: &CancellationToken,
    ) -> MarketResult<Option<EngagementState>> {
        let user = self
            .identity
            .current_user()
            .ok_or(MarketError::AuthenticationRequired)?;

        if cancel.is_cancelled() {
            return Ok(None);
        }

        let request = self.tracker.begin_toggle(forum_id)?;

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            res = self.gateway.confirm_like(forum_id) => Some(res),
        };

        let Some(result) = result else {
            self.tracker.abandon(forum_id);
            tracing::debug!(forum_id = %forum_id, "Like toggle cancelled, result discarded");
            return Ok(None);
        };

        match result {
            Ok(receipt) => {
                let settled = self.tracker.confirm(forum_id, receipt);
                tracing::info!(
                    user_id = %user.id,
                    forum_id = %forum_id,
                    intent = ?request.intent,
                    count = receipt.count,
                    "Like confirmed"
                );
                Ok(settled)
            }
            Err(e) => {
                self.tracker.fail(forum_id);
                tracing::warn!(forum_id = %forum_id, error = %e, "Like failed, rolled back");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientError, ClientResult};
    use async_trait::async_trait;
    use shared::client::UserInfo;
    use shared::models::LikeReceipt;

    struct FixedLike(u64);

    #[async_trait]
    impl LikeGateway for FixedLike {
        async fn confirm_like(&self, _forum_id: &ForumId) -> ClientResult<LikeReceipt> {
            Ok(LikeReceipt { count: self.0 })
        }
    }

    struct DownLike;

    #[async_trait]
    impl LikeGateway for DownLike {
        async fn confirm_like(&self, _forum_id: &ForumId) -> ClientResult<LikeReceipt> {
            Err(ClientError::Internal("Server unavailable".into()))
        }
    }

    fn service<G: LikeGateway>(gateway: G, signed_in: bool) -> EngagementService<G> {
        let session = if signed_in {
            Session::signed_in(UserInfo::new("u1", "Ada"))
        } else {
            Session::new()
        };
        let tracker = Arc::new(EngagementTracker::new());
        tracker.load(ForumId::from("f1"), EngagementState::new(false, 5));
        EngagementService::new(gateway, Arc::new(session), tracker)
    }

    #[tokio::test]
    async fn test_confirmed_toggle() {
        let svc = service(FixedLike(6), true);
        let settled = svc
            .toggle_like(&ForumId::from("f1"), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(settled, Some(EngagementState::new(true, 6)));
    }

    #[tokio::test]
    async fn test_failed_toggle_rolls_back() {
        let svc = service(DownLike, true);
        let err = svc
            .toggle_like(&ForumId::from("f1"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::RemoteFailure(ref m) if m == "Server unavailable"));
        assert_eq!(
            svc.state(&ForumId::from("f1")),
            Some(EngagementState::new(false, 5))
        );
    }

    #[tokio::test]
    async fn test_anonymous_toggle_changes_nothing() {
        let svc = service(FixedLike(6), false);
        let err = svc
            .toggle_like(&ForumId::from("f1"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MarketError::AuthenticationRequired));
        assert_eq!(
            svc.state(&ForumId::from("f1")),
            Some(EngagementState::new(false, 5))
        );
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let svc = service(FixedLike(6), true);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let settled = svc.toggle_like(&ForumId::from("f1"), &cancel).await.unwrap();
        assert_eq!(settled, None);
        assert_eq!(
            svc.state(&ForumId::from("f1")),
            Some(EngagementState::new(false, 5))
        );
    }
}
