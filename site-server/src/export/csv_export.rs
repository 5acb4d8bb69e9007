//! Booking CSV export
//!
//! One header row, one data row per booking in the order handed in.
//! Export order must match on-screen order, so the caller passes the
//! pipeline's output. Quoting follows standard CSV rules (fields with
//! commas, quotes or newlines are quoted, embedded quotes doubled);
//! timestamps serialize as RFC 3339 with the business-timezone offset so
//! the file re-parses identically regardless of viewer locale.

use chrono::DateTime;
use chrono_tz::Tz;

use shared::models::Booking;

use crate::utils::time::format_rfc3339;
use crate::utils::{AppError, AppResult};

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Fixed, documented column set
pub const CSV_HEADERS: [&str; 11] = [
    "id",
    "scheduled_at",
    "customer_name",
    "email",
    "phone",
    "tour_id",
    "party_size",
    "amount",
    "currency",
    "status",
    "notes",
];

/// Serialize bookings to CSV bytes, preserving the given order
pub fn bookings_to_csv(bookings: &[Booking], tz: Tz) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| AppError::internal(format!("CSV header write failed: {}", e)))?;

    for b in bookings {
        let scheduled_at = format_rfc3339(b.scheduled_at, tz);
        let party_size = b.party_size.to_string();
        let amount = b.amount.amount_string();

        writer
            .write_record([
                b.id.as_str(),
                scheduled_at.as_str(),
                b.customer_name.as_str(),
                b.email.as_str(),
                b.phone.as_str(),
                b.tour_id.as_str(),
                party_size.as_str(),
                amount.as_str(),
                b.amount.currency.code(),
                b.status.as_str(),
                b.notes.as_deref().unwrap_or(""),
            ])
            .map_err(|e| AppError::internal(format!("CSV row write failed: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV buffer error: {}", e)))
}

/// Download filename: bookings-YYYYMMDD-HHMMSS.csv (business timezone)
pub fn export_filename(now: i64, tz: Tz) -> String {
    DateTime::from_timestamp_millis(now)
        .map(|dt| {
            format!(
                "bookings-{}.csv",
                dt.with_timezone(&tz).format("%Y%m%d-%H%M%S")
            )
        })
        .unwrap_or_else(|| "bookings.csv".to_string())
}
