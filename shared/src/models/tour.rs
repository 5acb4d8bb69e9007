//! Tour Model

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Map waypoint for the tour route display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Tour entity, immutable reference data
///
/// `tags` keep insertion order for display; filtering treats them as a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Duration label, e.g. "4D3N"
    pub duration: String,
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<Waypoint>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Tour {
    /// Case-insensitive tag membership (order-irrelevant for filtering)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_has_tag_ignores_case() {
        let tour = Tour {
            id: "t-penang".into(),
            title: "Penang Heritage Trail".into(),
            location: "Penang".into(),
            duration: "2D1N".into(),
            price: Money::from_major(350, Currency::Myr),
            gallery: None,
            waypoints: None,
            tags: vec!["Heritage".into(), "Food".into()],
        };
        assert!(tour.has_tag("heritage"));
        assert!(tour.has_tag("FOOD"));
        assert!(!tour.has_tag("island"));
    }
}
