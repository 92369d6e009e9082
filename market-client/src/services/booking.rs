//! Booking flow: price, guard, persist

use crate::api::CartGateway;
use crate::session::{Identity, Session};
use chrono::NaiveDate;
use market_core::{MarketError, MarketResult, Notice, PriceQuote, can_add, compute_total, money};
use rust_decimal::Decimal;
use shared::CartId;
use shared::models::{CartEntry, Item, PartyComposition};
use std::sync::Arc;

/// Booking widget state with the UI defaults
///
/// Adults never drop below one and the other counts never below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    composition: PartyComposition,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            date: Some(shared::util::today()),
            composition: PartyComposition::default(),
        }
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn composition(&self) -> PartyComposition {
        self.composition
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn increment_adults(&mut self) {
        self.composition.adults = self.composition.adults.saturating_add(1);
    }

    pub fn decrement_adults(&mut self) {
        if self.composition.adults > 1 {
            self.composition.adults -= 1;
        }
    }

    pub fn increment_children(&mut self) {
        self.composition.children = self.composition.children.saturating_add(1);
    }

    pub fn decrement_children(&mut self) {
        self.composition.children = self.composition.children.saturating_sub(1);
    }

    pub fn increment_infants(&mut self) {
        self.composition.infants = self.composition.infants.saturating_add(1);
    }

    pub fn decrement_infants(&mut self) {
        self.composition.infants = self.composition.infants.saturating_sub(1);
    }

    /// Live quote for the current party
    pub fn quote(&self, unit_price: Decimal) -> MarketResult<PriceQuote> {
        PriceQuote::new(unit_price, self.composition)
    }
}

/// Successful add-to-cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartOutcome {
    pub cart_id: CartId,
    pub entry: CartEntry,
    pub notice: Notice,
}

impl CartOutcome {
    /// Booked total formatted with two decimals
    pub fn display_total(&self) -> String {
        money::format_amount(self.entry.total_price)
    }
}

/// Adds items to the signed-in user's cart
pub struct BookingService<G> {
    gateway: G,
    session: Arc<Session>,
}

impl<G: CartGateway> BookingService<G> {
    pub fn new(gateway: G, session: Arc<Session>) -> Self {
        Self { gateway, session }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Add `item` for `date` and `composition`
    ///
    /// Local checks run in order: signed-in user, price, date, duplicate.
    /// The item stays reserved while the request is in flight and only
    /// enters the session cart once the backend accepts the entry.
    pub async fn add_to_cart(
        &self,
        item: &Item,
        date: Option<NaiveDate>,
        composition: PartyComposition,
    ) -> MarketResult<CartOutcome> {
        let user = self
            .session
            .current_user()
            .ok_or(MarketError::AuthenticationRequired)?;

        let total = compute_total(item.price, &composition)?;
        let entry = CartEntry::new(item.id.clone(), date, composition, total);

        let decision = can_add(&self.session.cart_snapshot(), &entry);
        if !decision.is_allowed() {
            tracing::debug!(item_id = %item.id, ?decision, "Add to cart rejected");
        }
        decision.into_result(&entry)?;

        let Some(reservation) = self.session.reserve_cart_item(entry.item_id.clone()) else {
            tracing::debug!(item_id = %item.id, "Add to cart rejected, item already being added");
            return Err(MarketError::DuplicateItem(entry.item_id.clone()));
        };

        // Dropping the reservation on error releases the item
        let cart_id = self.gateway.persist_cart(&entry).await.map_err(|e| {
            tracing::warn!(item_id = %item.id, error = %e, "Failed to persist cart entry");
            MarketError::from(e)
        })?;

        reservation.commit();
        tracing::info!(
            user_id = %user.id,
            item_id = %entry.item_id,
            cart_id = %cart_id,
            total = %entry.total_price,
            "Item added to cart"
        );

        Ok(CartOutcome {
            cart_id,
            entry,
            notice: Notice::item_added(),
        })
    }

    /// Add using the current state of a booking form
    pub async fn add_from_form(&self, item: &Item, form: &BookingForm) -> MarketResult<CartOutcome> {
        self.add_to_cart(item, form.date, form.composition()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let form = BookingForm::new();
        assert_eq!(form.date, Some(shared::util::today()));
        assert_eq!(form.composition(), PartyComposition::new(1, 0, 0));
    }

    #[test]
    fn test_form_floors() {
        let mut form = BookingForm::new();
        form.decrement_adults();
        form.decrement_children();
        form.decrement_infants();
        assert_eq!(form.composition(), PartyComposition::new(1, 0, 0));

        form.increment_adults();
        form.increment_children();
        form.increment_infants();
        form.increment_infants();
        assert_eq!(form.composition(), PartyComposition::new(2, 1, 2));
    }

    #[test]
    fn test_form_quote_follows_changes() {
        let mut form = BookingForm::for_date(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
        assert_eq!(form.quote(Decimal::TEN).unwrap().total(), Decimal::TEN);

        form.increment_adults();
        form.increment_children();
        form.increment_infants();
        assert_eq!(form.quote(Decimal::TEN).unwrap().total(), Decimal::from(29));
    }
}
