//! Booking Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::money::Money;

/// Booking lifecycle status
///
/// Cancellation and refund are status transitions, never record removal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Refunded,
}

impl BookingStatus {
    /// Allowed transitions:
    ///
    /// | from      | to                    |
    /// |-----------|-----------------------|
    /// | pending   | confirmed, cancelled  |
    /// | confirmed | cancelled, refunded   |
    /// | cancelled | refunded              |
    /// | refunded  | (terminal)            |
    ///
    /// A cancelled booking stays refundable (money may already have been
    /// taken). Same-status updates are accepted as no-ops so a notes-only
    /// update never trips the check.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Cancelled)
                | (Confirmed, Refunded)
                | (Cancelled, Refunded)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Refunded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Refunded => "refunded",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "refunded" => Ok(BookingStatus::Refunded),
            _ => Err(()),
        }
    }
}

/// Booking entity
///
/// `id` and `scheduled_at` are immutable once created; only `status` and
/// `notes` change, through the explicit update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Scheduled departure (Unix millis)
    pub scheduled_at: i64,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    /// Tour reference (seeded tour id)
    pub tour_id: String,
    pub party_size: u32,
    pub amount: Money,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Update booking payload (admin action)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    /// `Some("")` clears the notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
