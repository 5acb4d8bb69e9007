//! In-memory record store
//!
//! Owns every record collection for the process lifetime. Tours and deals
//! are immutable reference data; bookings mutate in place behind a lock;
//! enquiries are append-only. Nothing is persisted; the store reseeds on
//! restart by design.
//!
//! Insertion order of each collection is preserved: the query pipeline's
//! stable-sort tiebreak and the export order both depend on it.

mod seed;

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use shared::models::{Booking, BookingUpdate, Deal, Enquiry, EnquiryCreate, Tour};

use crate::utils::{AppError, AppResult};

/// Record store - exclusive owner of all collections
#[derive(Debug)]
pub struct RecordStore {
    tours: Vec<Tour>,
    tour_index: HashMap<String, usize>,
    deals: Vec<Deal>,
    deal_index: HashMap<String, usize>,
    bookings: RwLock<Vec<Booking>>,
    enquiries: RwLock<Vec<Enquiry>>,
}

impl RecordStore {
    pub fn new(tours: Vec<Tour>, deals: Vec<Deal>, bookings: Vec<Booking>) -> Self {
        let tour_index = tours
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        let deal_index = deals
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();

        Self {
            tours,
            tour_index,
            deals,
            deal_index,
            bookings: RwLock::new(bookings),
            enquiries: RwLock::new(Vec::new()),
        }
    }

    /// Store seeded with the demo catalog, relative to `now`
    pub fn seeded(now: i64) -> Self {
        Self::new(
            seed::seed_tours(),
            seed::seed_deals(now),
            seed::seed_bookings(now),
        )
    }

    // ========== Tours (immutable) ==========

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn tour(&self, id: &str) -> Option<&Tour> {
        self.tour_index.get(id).map(|&i| &self.tours[i])
    }

    // ========== Deals (immutable) ==========

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn deal(&self, id: &str) -> Option<&Deal> {
        self.deal_index.get(id).map(|&i| &self.deals[i])
    }

    // ========== Bookings (mutable) ==========

    /// Clone of the full booking collection, in insertion order
    pub fn bookings_snapshot(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }

    pub fn booking(&self, id: &str) -> Option<Booking> {
        self.bookings.read().iter().find(|b| b.id == id).cloned()
    }

    /// Apply an admin update to one booking
    ///
    /// A single replace-in-place keyed by id, performed under the write
    /// lock; there is no partial-failure window. Status changes are
    /// checked against the transition table; `id` and `scheduled_at`
    /// cannot change here.
    pub fn update_booking(
        &self,
        id: &str,
        update: BookingUpdate,
        now: i64,
    ) -> AppResult<Booking> {
        let mut bookings = self.bookings.write();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::not_found(format!("Booking {}", id)))?;

        if let Some(next) = update.status {
            if !booking.status.can_transition_to(next) {
                return Err(AppError::business_rule(format!(
                    "Booking {} cannot move from {} to {}",
                    id,
                    booking.status.as_str(),
                    next.as_str()
                )));
            }
            booking.status = next;
        }

        if let Some(notes) = update.notes {
            booking.notes = if notes.is_empty() { None } else { Some(notes) };
        }

        booking.updated_at = now;
        Ok(booking.clone())
    }

    // ========== Enquiries (append-only) ==========

    pub fn add_enquiry(&self, payload: EnquiryCreate, now: i64) -> Enquiry {
        let enquiry = Enquiry {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            message: payload.message,
            tour_id: payload.tour_id,
            created_at: now,
        };
        self.enquiries.write().push(enquiry.clone());
        enquiry
    }

    pub fn enquiries_snapshot(&self) -> Vec<Enquiry> {
        self.enquiries.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::BookingStatus;

    const NOW: i64 = 1_760_000_000_000;

    #[test]
    fn test_update_status_valid_transition() {
        let store = RecordStore::seeded(NOW);
        let pending = store
            .bookings_snapshot()
            .into_iter()
            .find(|b| b.status == BookingStatus::Pending)
            .expect("seed has a pending booking");

        let updated = store
            .update_booking(
                &pending.id,
                BookingUpdate {
                    status: Some(BookingStatus::Confirmed),
                    notes: None,
                },
                NOW + 1,
            )
            .unwrap();

        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(updated.updated_at, NOW + 1);
        // scheduled_at untouched
        assert_eq!(updated.scheduled_at, pending.scheduled_at);
    }

    #[test]
    fn test_update_status_invalid_transition() {
        let store = RecordStore::seeded(NOW);
        let refunded = store
            .bookings_snapshot()
            .into_iter()
            .find(|b| b.status == BookingStatus::Refunded)
            .expect("seed has a refunded booking");

        let err = store
            .update_booking(
                &refunded.id,
                BookingUpdate {
                    status: Some(BookingStatus::Confirmed),
                    notes: None,
                },
                NOW + 1,
            )
            .unwrap_err();

        assert!(matches!(err, AppError::BusinessRule(_)));
    }

    #[test]
    fn test_notes_update_and_clear() {
        let store = RecordStore::seeded(NOW);
        let id = store.bookings_snapshot()[0].id.clone();

        let updated = store
            .update_booking(
                &id,
                BookingUpdate {
                    status: None,
                    notes: Some("late arrival".to_string()),
                },
                NOW,
            )
            .unwrap();
        assert_eq!(updated.notes.as_deref(), Some("late arrival"));

        let cleared = store
            .update_booking(
                &id,
                BookingUpdate {
                    status: None,
                    notes: Some(String::new()),
                },
                NOW,
            )
            .unwrap();
        assert_eq!(cleared.notes, None);
    }

    #[test]
    fn test_unknown_booking_not_found() {
        let store = RecordStore::seeded(NOW);
        let err = store
            .update_booking("BK-nope", BookingUpdate::default(), NOW)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let store = RecordStore::seeded(NOW);
        let first = store.bookings_snapshot();
        let second = store.bookings_snapshot();
        let ids: Vec<_> = first.iter().map(|b| &b.id).collect();
        let ids2: Vec<_> = second.iter().map(|b| &b.id).collect();
        assert_eq!(ids, ids2);
    }

    #[test]
    fn test_enquiry_append() {
        let store = RecordStore::seeded(NOW);
        let enquiry = store.add_enquiry(
            EnquiryCreate {
                name: "Aina".to_string(),
                email: "aina@example.com".to_string(),
                phone: None,
                message: "Do you run the island hop in September?".to_string(),
                tour_id: Some("t-langkawi".to_string()),
            },
            NOW,
        );

        let all = store.enquiries_snapshot();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, enquiry.id);
    }
}
