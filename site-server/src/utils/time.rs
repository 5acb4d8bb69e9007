//! Time helpers for business timezone conversion
//!
//! Records store `i64` Unix millis; every conversion to the business
//! timezone happens here, at presentation and filter boundaries. The
//! evaluation instant is always passed in by the caller so one logical
//! pass sees one consistent clock.

use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;

/// Midnight of the local day containing `ts`, in millis
///
/// DST gap fallback: if local midnight does not exist, fall back to UTC.
pub fn local_day_start_millis(ts: i64, tz: Tz) -> i64 {
    let Some(dt) = DateTime::from_timestamp_millis(ts) else {
        return ts;
    };
    let naive = dt.with_timezone(&tz).date_naive().and_hms_opt(0, 0, 0).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|d| d.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Canonical RFC 3339 string with the business-timezone offset
///
/// Used for machine-re-parseable exports; locale formatting never
/// reaches a file.
pub fn format_rfc3339(ts: i64, tz: Tz) -> String {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| {
            dt.with_timezone(&tz)
                .to_rfc3339_opts(SecondsFormat::Secs, false)
        })
        .unwrap_or_default()
}

/// Human-readable timestamp for rendered documents (DD Mon YYYY, HH:MM)
pub fn format_display(ts: i64, tz: Tz) -> String {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.with_timezone(&tz).format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const KL: Tz = chrono_tz::Asia::Kuala_Lumpur;

    #[test]
    fn test_local_day_start() {
        let now = KL.with_ymd_and_hms(2026, 8, 8, 10, 30, 0).unwrap();
        let midnight = KL.with_ymd_and_hms(2026, 8, 8, 0, 0, 0).unwrap();
        assert_eq!(
            local_day_start_millis(now.timestamp_millis(), KL),
            midnight.timestamp_millis()
        );
    }

    #[test]
    fn test_rfc3339_carries_offset() {
        let ts = KL
            .with_ymd_and_hms(2026, 8, 8, 14, 5, 9)
            .unwrap()
            .timestamp_millis();
        assert_eq!(format_rfc3339(ts, KL), "2026-08-08T14:05:09+08:00");
    }

    #[test]
    fn test_out_of_range_is_total() {
        assert_eq!(format_rfc3339(i64::MAX, KL), "");
        assert_eq!(local_day_start_millis(i64::MAX, KL), i64::MAX);
    }
}
