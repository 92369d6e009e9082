//! Cart Model

use super::party::PartyComposition;
use crate::types::{CartId, ItemId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Booking candidate submitted to the cart
///
/// Identity is `item_id` alone: the cart holds at most one entry per item
/// whatever the date or party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub item_id: ItemId,
    /// `None` until the traveller picks a date
    pub selected_date: Option<NaiveDate>,
    #[serde(rename = "persons")]
    pub composition: PartyComposition,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl CartEntry {
    pub fn new(
        item_id: impl Into<ItemId>,
        selected_date: Option<NaiveDate>,
        composition: PartyComposition,
        total_price: Decimal,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            selected_date,
            composition,
            total_price,
        }
    }
}

/// Cart record returned by the backend after a successful add
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: CartId,
}
