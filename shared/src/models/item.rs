//! Marketplace Item Model

use crate::types::ItemId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Bookable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id", alias = "id")]
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// Price per adult
    pub price: Decimal,
    #[serde(default)]
    pub available_dates: AvailableDates,
}

/// Availability window as `[from, to]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailableDates {
    #[serde(default)]
    pub dates: Vec<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub title: String,
    pub markdown: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    pub region: String,
}

/// New listing draft
///
/// Field rules mirror the listing form. A negative price is rejected by the
/// catalog service since `Decimal` has no range validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[validate(length(min = 6, message = "Title must be at least 6 characters"))]
    pub title: String,
    pub category: String,
    pub content: Vec<ContentSection>,
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[validate(nested)]
    pub location: Location,
    pub price: Decimal,
    #[serde(default)]
    pub available_dates: AvailableDates,
}
