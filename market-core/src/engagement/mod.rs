//! Optimistic like/unlike
//!
//! A toggle updates the displayed state immediately and produces a
//! [`ConfirmationRequest`] holding the exact pre-toggle snapshot. The remote
//! outcome either replaces the count with the authoritative value or restores
//! the snapshot.
//!
//! ```text
//! Idle ──toggle──▶ Pending ──confirm──▶ Confirmed ──▶ (Idle)
//!                     │
//!                     ├──fail──▶ RolledBack ──▶ (Idle)
//!                     │
//!                     └──abandon──▶ Idle
//! ```
//!
//! Confirmed and RolledBack accept a new toggle just like Idle.

mod counter;
mod tracker;

pub use counter::*;
pub use tracker::*;
