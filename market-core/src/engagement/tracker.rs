//! Engagement tracker keyed by entity id

use super::counter::{ConfirmationRequest, EngagementCounter, LikePhase};
use crate::error::MarketResult;
use dashmap::DashMap;
use shared::ForumId;
use shared::models::{EngagementState, LikeReceipt};
use std::fmt;
use std::hash::Hash;

/// Engagement state for every entity visible in a session
///
/// Rendering reads [`state`](Self::state); the like handler goes through
/// [`begin_toggle`](Self::begin_toggle) and then exactly one of
/// [`confirm`](Self::confirm), [`fail`](Self::fail) or
/// [`abandon`](Self::abandon). Completions arriving after an abandon are
/// ignored.
#[derive(Debug)]
pub struct EngagementTracker<K = ForumId>
where
    K: Eq + Hash,
{
    entries: DashMap<K, EngagementCounter>,
}

impl<K> Default for EngagementTracker<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<K> EngagementTracker<K>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or refresh an entity from the authoritative value
    ///
    /// Returns `false` when a toggle is in flight and the load was skipped.
    pub fn load(&self, id: K, state: EngagementState) -> bool {
        let mut entry = self.entries.entry(id.clone()).or_default();
        let applied = entry.reload(state);
        if !applied {
            tracing::debug!(entity = %id, "Skipped engagement reload, toggle pending");
        }
        applied
    }

    /// State to render, `None` for entities never loaded
    pub fn state(&self, id: &K) -> Option<EngagementState> {
        self.entries.get(id).map(|c| c.state())
    }

    pub fn phase(&self, id: &K) -> LikePhase {
        self.entries
            .get(id)
            .map(|c| c.phase())
            .unwrap_or_default()
    }

    pub fn is_pending(&self, id: &K) -> bool {
        self.entries.get(id).is_some_and(|c| c.is_pending())
    }

    /// Toggle optimistically; unknown entities start from zero likes
    pub fn begin_toggle(&self, id: &K) -> MarketResult<ConfirmationRequest> {
        let mut entry = self.entries.entry(id.clone()).or_default();
        let request = entry.toggle()?;
        tracing::debug!(
            entity = %id,
            intent = ?request.intent,
            count = request.optimistic.count,
            "Applied optimistic like toggle"
        );
        Ok(request)
    }

    /// Settle a pending toggle with the backend count
    pub fn confirm(&self, id: &K, receipt: LikeReceipt) -> Option<EngagementState> {
        let settled = self.entries.get_mut(id)?.confirm(receipt);
        if settled.is_none() {
            tracing::debug!(entity = %id, "Discarded confirmation with nothing pending");
        }
        settled
    }

    /// Roll back a pending toggle
    pub fn fail(&self, id: &K) -> Option<EngagementState> {
        let restored = self.entries.get_mut(id)?.fail();
        if let Some(state) = restored {
            tracing::warn!(entity = %id, count = state.count, "Rolled back like toggle");
        }
        restored
    }

    /// Give up on a pending toggle whose result will never be applied
    pub fn abandon(&self, id: &K) -> Option<EngagementState> {
        let restored = self.entries.get_mut(id)?.abandon();
        if restored.is_some() {
            tracing::debug!(entity = %id, "Abandoned pending like toggle");
        }
        restored
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
