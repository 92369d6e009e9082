//! Per-entity engagement counter

use crate::error::{MarketError, MarketResult};
use shared::models::{EngagementState, LikeReceipt};

/// Direction of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeIntent {
    Like,
    Unlike,
}

/// Outstanding toggle waiting for remote confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub intent: LikeIntent,
    /// State before the toggle, restored verbatim on failure
    pub before: EngagementState,
    /// State displayed while the confirmation is in flight
    pub optimistic: EngagementState,
}

impl ConfirmationRequest {
    /// Settled state after a successful confirmation
    ///
    /// The backend count replaces the local increment.
    pub fn confirmed(&self, receipt: LikeReceipt) -> EngagementState {
        EngagementState::new(self.optimistic.liked, receipt.count)
    }

    /// Settled state after a failed confirmation
    pub fn rolled_back(&self) -> EngagementState {
        self.before
    }
}

/// Flip the like flag and compute the optimistic count
pub fn toggle_like(state: EngagementState) -> (EngagementState, ConfirmationRequest) {
    let (intent, optimistic) = if state.liked {
        (
            LikeIntent::Unlike,
            EngagementState::new(false, state.count.saturating_sub(1)),
        )
    } else {
        (LikeIntent::Like, EngagementState::new(true, state.count + 1))
    };

    let request = ConfirmationRequest {
        intent,
        before: state,
        optimistic,
    };
    (optimistic, request)
}

/// Lifecycle of the latest toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikePhase {
    #[default]
    Idle,
    Pending,
    Confirmed,
    RolledBack,
}

/// Engagement state of one entity plus its in-flight toggle
#[derive(Debug, Clone, Default)]
pub struct EngagementCounter {
    state: EngagementState,
    phase: LikePhase,
    pending: Option<ConfirmationRequest>,
}

impl EngagementCounter {
    pub fn new(state: EngagementState) -> Self {
        Self {
            state,
            phase: LikePhase::Idle,
            pending: None,
        }
    }

    /// State to render
    pub fn state(&self) -> EngagementState {
        self.state
    }

    pub fn phase(&self) -> LikePhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a toggle optimistically
    ///
    /// Only one toggle may be in flight; a second one fails with
    /// `ToggleInProgress` and changes nothing.
    pub fn toggle(&mut self) -> MarketResult<ConfirmationRequest> {
        if self.pending.is_some() {
            return Err(MarketError::ToggleInProgress);
        }
        let (optimistic, request) = toggle_like(self.state);
        self.state = optimistic;
        self.phase = LikePhase::Pending;
        self.pending = Some(request);
        Ok(request)
    }

    /// Settle the in-flight toggle with the backend count
    ///
    /// Returns `None` when nothing is pending (stale completion).
    pub fn confirm(&mut self, receipt: LikeReceipt) -> Option<EngagementState> {
        let request = self.pending.take()?;
        self.state = request.confirmed(receipt);
        self.phase = LikePhase::Confirmed;
        Some(self.state)
    }

    /// Undo the in-flight toggle
    pub fn fail(&mut self) -> Option<EngagementState> {
        let request = self.pending.take()?;
        self.state = request.rolled_back();
        self.phase = LikePhase::RolledBack;
        Some(self.state)
    }

    /// Drop the in-flight toggle without waiting for its outcome
    ///
    /// Restores the pre-toggle state and returns to `Idle`.
    pub fn abandon(&mut self) -> Option<EngagementState> {
        let request = self.pending.take()?;
        self.state = request.before;
        self.phase = LikePhase::Idle;
        Some(self.state)
    }

    /// Replace the state with a freshly fetched authoritative value
    ///
    /// Ignored while a toggle is pending.
    pub fn reload(&mut self, state: EngagementState) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.state = state;
        self.phase = LikePhase::Idle;
        true
    }
}
