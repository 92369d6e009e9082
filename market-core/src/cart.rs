//! Cart membership guard
//!
//! Identity-based: a cart holds at most one entry per item. The check ignores
//! the selected date and the party, so re-booking the same item for another
//! day is rejected too. That matches the live behaviour and is kept for
//! compatibility until product decides on date-aware overlap detection.

use crate::error::MarketError;
use shared::ItemId;
use shared::models::CartEntry;
use std::collections::HashSet;

/// Why a candidate was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingDate,
    DuplicateItem,
}

/// Guard verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartDecision {
    Allow,
    Reject(RejectReason),
}

impl CartDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Turn a rejection into the error reported to the caller
    pub fn into_result(self, candidate: &CartEntry) -> Result<(), MarketError> {
        match self {
            Self::Allow => Ok(()),
            Self::Reject(RejectReason::MissingDate) => Err(MarketError::MissingDate),
            Self::Reject(RejectReason::DuplicateItem) => {
                Err(MarketError::DuplicateItem(candidate.item_id.clone()))
            }
        }
    }
}

/// Classify `candidate` against the items already in the cart
///
/// A missing date is reported before the identity check. The guard only
/// classifies; persisting an allowed entry is up to the caller.
pub fn can_add(existing: &HashSet<ItemId>, candidate: &CartEntry) -> CartDecision {
    if candidate.selected_date.is_none() {
        return CartDecision::Reject(RejectReason::MissingDate);
    }
    if existing.contains(&candidate.item_id) {
        return CartDecision::Reject(RejectReason::DuplicateItem);
    }
    CartDecision::Allow
}
