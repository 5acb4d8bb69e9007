//! Deal Model

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Deal category enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealType {
    Beach,
    Island,
    City,
    Highland,
    Cruise,
    Heritage,
}

/// Single itinerary step of a packaged deal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryStep {
    pub day: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Promotional deal entity
///
/// Immutable after seeding; `id` is the lookup key. A deal is active when
/// its validity window contains the evaluation instant and the sale price
/// is strictly below the original price (see `economics`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub location: String,
    pub deal_type: DealType,
    /// Duration label, e.g. "3D2N"
    pub duration: String,
    pub original_price: Money,
    pub sale_price: Money,
    /// Validity window start (Unix millis); absent = no lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<i64>,
    /// Validity window end (Unix millis); absent = no upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    /// Seats left at the promotional price; never decremented here
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_quota: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<ItineraryStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}
