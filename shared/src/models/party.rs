//! Party Composition Model

use serde::{Deserialize, Serialize};

/// Travellers in a single booking
///
/// A valid party has at least one adult. The type does not enforce that so a
/// bad selection can reach the price calculator and be rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyComposition {
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
}

impl PartyComposition {
    pub const fn new(adults: u32, children: u32, infants: u32) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    /// Party of `n` adults only
    pub const fn adults(n: u32) -> Self {
        Self::new(n, 0, 0)
    }

    pub const fn has_adult(&self) -> bool {
        self.adults >= 1
    }
}

impl Default for PartyComposition {
    /// One adult, matching the booking form's initial selection
    fn default() -> Self {
        Self::adults(1)
    }
}
