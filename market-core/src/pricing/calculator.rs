//! Price Calculator
//!
//! `total = unit_price * adults + unit_price * 0.9 * children`, infants free.
//! Uses rust_decimal with no internal rounding.

use crate::error::{MarketError, MarketResult};
use crate::money::{self, CHILD_RATE, INFANT_RATE};
use rust_decimal::Decimal;
use shared::models::PartyComposition;

fn validate(unit_price: Decimal, composition: &PartyComposition) -> MarketResult<()> {
    if unit_price < Decimal::ZERO {
        return Err(MarketError::InvalidPrice(unit_price));
    }
    if !composition.has_adult() {
        return Err(MarketError::InvalidComposition);
    }
    Ok(())
}

/// Total booking price for a party
///
/// Fails with `InvalidPrice` when `unit_price < 0` and with
/// `InvalidComposition` when the party has no adult.
pub fn compute_total(unit_price: Decimal, composition: &PartyComposition) -> MarketResult<Decimal> {
    validate(unit_price, composition)?;

    let adults = unit_price * Decimal::from(composition.adults);
    let children = unit_price * CHILD_RATE * Decimal::from(composition.children);
    let infants = unit_price * INFANT_RATE * Decimal::from(composition.infants);

    Ok(adults + children + infants)
}

/// Unit price and party, with the total derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    unit_price: Decimal,
    composition: PartyComposition,
}

impl PriceQuote {
    pub fn new(unit_price: Decimal, composition: PartyComposition) -> MarketResult<Self> {
        validate(unit_price, &composition)?;
        Ok(Self {
            unit_price,
            composition,
        })
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn composition(&self) -> &PartyComposition {
        &self.composition
    }

    /// Recomputed on every call
    pub fn total(&self) -> Decimal {
        // Fields were validated on construction
        compute_total(self.unit_price, &self.composition).unwrap_or_default()
    }

    /// Total rounded to the currency minor unit
    pub fn display_total(&self) -> Decimal {
        money::to_display(self.total())
    }

    /// Total formatted with two decimals, e.g. `"6.33"`
    pub fn formatted_total(&self) -> String {
        money::format_amount(self.total())
    }

    pub fn with_composition(self, composition: PartyComposition) -> MarketResult<Self> {
        Self::new(self.unit_price, composition)
    }

    pub fn with_unit_price(self, unit_price: Decimal) -> MarketResult<Self> {
        Self::new(unit_price, self.composition)
    }
}
