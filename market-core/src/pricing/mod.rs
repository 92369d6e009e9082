//! Booking price calculation
//!
//! Totals are derived from a unit price and a party composition and are
//! never cached: a [`PriceQuote`] recomputes its total on every access.

mod calculator;

pub use calculator::*;
