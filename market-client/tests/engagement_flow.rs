// market-client/tests/engagement_flow.rs
// Optimistic like toggles through the service layer

mod common;

use common::{FakeBackend, GatedLike, signed_in, thread};
use market_client::{EngagementService, ForumService, MarketError, Notice};
use market_core::{EngagementTracker, LikePhase};
use shared::ForumId;
use shared::models::EngagementState;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn f1() -> ForumId {
    ForumId::from("f1")
}

#[tokio::test]
async fn test_like_then_unlike_returns_to_original_count() {
    let backend = FakeBackend::new().with_forum(thread("f1", &["u2", "u3", "u4", "u5", "u6"]));
    let session = signed_in();
    let tracker = Arc::new(EngagementTracker::new());
    let forums = ForumService::new(backend.clone(), session.clone(), tracker.clone());
    let likes = EngagementService::new(backend.clone(), session, tracker.clone());

    forums.open_thread(&f1()).await.unwrap();
    assert_eq!(likes.state(&f1()), Some(EngagementState::new(false, 5)));

    let cancel = CancellationToken::new();
    let liked = likes.toggle_like(&f1(), &cancel).await.unwrap();
    assert_eq!(liked, Some(EngagementState::new(true, 6)));

    let unliked = likes.toggle_like(&f1(), &cancel).await.unwrap();
    assert_eq!(unliked, Some(EngagementState::new(false, 5)));
    assert_eq!(backend.forum("f1").unwrap().likes.len(), 5);
}

#[tokio::test]
async fn test_failure_restores_exact_prior_state() {
    let backend = FakeBackend::new().with_forum(thread("f1", &["u2"]));
    backend.fail_writes("Server unavailable");
    let tracker = Arc::new(EngagementTracker::new());
    tracker.load(f1(), EngagementState::new(false, 5));
    let likes = EngagementService::new(backend, signed_in(), tracker.clone());

    let err = likes
        .toggle_like(&f1(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(err.requires_rollback());
    assert_eq!(tracker.state(&f1()), Some(EngagementState::new(false, 5)));
    assert_eq!(tracker.phase(&f1()), LikePhase::RolledBack);
}

#[tokio::test]
async fn test_second_toggle_while_pending_is_ignored() {
    let gate = GatedLike::answering(6);
    let tracker = Arc::new(EngagementTracker::new());
    tracker.load(f1(), EngagementState::new(false, 5));
    let likes = Arc::new(EngagementService::new(gate.clone(), signed_in(), tracker.clone()));

    let task = {
        let likes = likes.clone();
        tokio::spawn(async move { likes.toggle_like(&f1(), &CancellationToken::new()).await })
    };
    gate.started.notified().await;

    // Optimistic state is visible while the request is in flight
    assert_eq!(tracker.state(&f1()), Some(EngagementState::new(true, 6)));
    assert!(tracker.is_pending(&f1()));

    let err = likes
        .toggle_like(&f1(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::ToggleInProgress));
    assert_eq!(Notice::for_error(&err), None);
    assert_eq!(tracker.state(&f1()), Some(EngagementState::new(true, 6)));

    gate.release.notify_one();
    let settled = task.await.unwrap().unwrap();
    assert_eq!(settled, Some(EngagementState::new(true, 6)));
    assert_eq!(tracker.phase(&f1()), LikePhase::Confirmed);
}

#[tokio::test]
async fn test_cancelled_view_discards_late_completion() {
    let gate = GatedLike::answering(42);
    let tracker = Arc::new(EngagementTracker::new());
    tracker.load(f1(), EngagementState::new(false, 5));
    let likes = Arc::new(EngagementService::new(gate.clone(), signed_in(), tracker.clone()));
    let cancel = CancellationToken::new();

    let task = {
        let likes = likes.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { likes.toggle_like(&f1(), &cancel).await })
    };
    gate.started.notified().await;

    cancel.cancel();
    assert_eq!(task.await.unwrap().unwrap(), None);
    assert_eq!(tracker.state(&f1()), Some(EngagementState::new(false, 5)));
    assert_eq!(tracker.phase(&f1()), LikePhase::Idle);
    assert!(!tracker.is_pending(&f1()));
}

#[tokio::test]
async fn test_torn_down_view_keeps_shared_state_for_other_views() {
    let backend = FakeBackend::new().with_forum(thread("f1", &["u2", "u3"]));
    let session = signed_in();
    let tracker = Arc::new(EngagementTracker::new());
    let forums = ForumService::new(backend.clone(), session.clone(), tracker.clone());
    forums.open_thread(&f1()).await.unwrap();

    // Detail view toggles through a slow gateway, then is torn down
    let gate = GatedLike::answering(3);
    let detail = Arc::new(EngagementService::new(gate.clone(), session.clone(), tracker.clone()));
    let detail_view = CancellationToken::new();
    let task = {
        let detail = detail.clone();
        let view = detail_view.clone();
        tokio::spawn(async move { detail.toggle_like(&f1(), &view).await })
    };
    gate.started.notified().await;
    detail_view.cancel();
    assert_eq!(task.await.unwrap().unwrap(), None);

    // List view still renders the thread and can like it
    assert_eq!(tracker.state(&f1()), Some(EngagementState::new(false, 2)));
    let list = EngagementService::new(backend.clone(), session, tracker.clone());
    let settled = list
        .toggle_like(&f1(), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(settled, Some(EngagementState::new(true, 3)));
    assert_eq!(backend.forum("f1").unwrap().likes.len(), 3);
}

#[tokio::test]
async fn test_anonymous_like_prompts_login() {
    let backend = FakeBackend::new().with_forum(thread("f1", &[]));
    let likes = EngagementService::new(
        backend.clone(),
        Arc::new(market_client::Session::new()),
        Arc::new(EngagementTracker::new()),
    );

    let err = likes
        .toggle_like(&f1(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::AuthenticationRequired));
    assert_eq!(Notice::for_action(&err, "like").unwrap().title, "Please login to like");
    assert!(backend.forum("f1").unwrap().likes.is_empty());
}
