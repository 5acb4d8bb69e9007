//! Customer API Handlers

use std::collections::HashMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use shared::models::{Booking, BookingStatus};
use shared::money::Money;

use crate::core::ServerState;
use crate::utils::AppResult;

/// Customer row derived from the booking collection
///
/// `total_spent` counts confirmed bookings only: pending money is not in
/// hand yet, cancelled was never taken, refunded was returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bookings: usize,
    pub total_spent: Money,
    /// Most recent scheduled trip (Unix millis)
    pub last_scheduled_at: i64,
}

/// Aggregate bookings into one row per distinct email
///
/// Name/phone come from the most recently created booking for that email.
fn aggregate(bookings: &[Booking]) -> Vec<CustomerView> {
    let mut by_email: HashMap<&str, CustomerView> = HashMap::new();
    let mut latest_created: HashMap<&str, i64> = HashMap::new();

    for b in bookings {
        let entry = by_email
            .entry(b.email.as_str())
            .or_insert_with(|| CustomerView {
                name: b.customer_name.clone(),
                email: b.email.clone(),
                phone: b.phone.clone(),
                bookings: 0,
                total_spent: Money::new(0, b.amount.currency),
                last_scheduled_at: b.scheduled_at,
            });

        entry.bookings += 1;
        entry.last_scheduled_at = entry.last_scheduled_at.max(b.scheduled_at);
        if b.status == BookingStatus::Confirmed
            && b.amount.currency == entry.total_spent.currency
        {
            entry.total_spent.minor += b.amount.minor;
        }

        let created = latest_created.entry(b.email.as_str()).or_insert(i64::MIN);
        if b.created_at >= *created {
            *created = b.created_at;
            entry.name = b.customer_name.clone();
            entry.phone = b.phone.clone();
        }
    }

    let mut customers: Vec<CustomerView> = by_email.into_values().collect();
    customers.sort_by(|a, b| a.name.cmp(&b.name));
    customers
}

/// GET /api/customers - derived customer listing
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CustomerView>>> {
    let bookings = state.store.bookings_snapshot();
    Ok(Json(aggregate(&bookings)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::money::Currency;

    fn booking(
        email: &str,
        name: &str,
        amount_major: i64,
        status: BookingStatus,
        scheduled_at: i64,
        created_at: i64,
    ) -> Booking {
        Booking {
            id: format!("BK-{}-{}", email, created_at),
            scheduled_at,
            customer_name: name.to_string(),
            email: email.to_string(),
            phone: "+60-12-000 0000".to_string(),
            tour_id: "t-penang".to_string(),
            party_size: 2,
            amount: Money::from_major(amount_major, Currency::Myr),
            status,
            notes: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_aggregates_by_email() {
        let bookings = vec![
            booking("a@example.com", "Aina", 500, BookingStatus::Confirmed, 100, 1),
            booking("a@example.com", "Aina T.", 300, BookingStatus::Confirmed, 200, 2),
            booking("b@example.com", "Ben", 700, BookingStatus::Pending, 150, 1),
        ];

        let customers = aggregate(&bookings);
        assert_eq!(customers.len(), 2);

        let aina = customers.iter().find(|c| c.email == "a@example.com").unwrap();
        assert_eq!(aina.bookings, 2);
        assert_eq!(aina.total_spent.minor, 80000);
        assert_eq!(aina.last_scheduled_at, 200);
        // latest booking wins the display name
        assert_eq!(aina.name, "Aina T.");
    }

    #[test]
    fn test_only_confirmed_money_counts() {
        let bookings = vec![
            booking("c@example.com", "Cara", 900, BookingStatus::Pending, 100, 1),
            booking("c@example.com", "Cara", 400, BookingStatus::Cancelled, 110, 2),
            booking("c@example.com", "Cara", 250, BookingStatus::Refunded, 120, 3),
            booking("c@example.com", "Cara", 100, BookingStatus::Confirmed, 130, 4),
        ];

        let customers = aggregate(&bookings);
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].bookings, 4);
        assert_eq!(customers[0].total_spent.minor, 10000);
    }

    #[test]
    fn test_sorted_by_name() {
        let bookings = vec![
            booking("z@example.com", "Zara", 100, BookingStatus::Confirmed, 1, 1),
            booking("a@example.com", "Amir", 100, BookingStatus::Confirmed, 1, 1),
        ];
        let customers = aggregate(&bookings);
        let names: Vec<_> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Amir", "Zara"]);
    }
}
