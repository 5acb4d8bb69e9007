//! Booking list query pipeline
//!
//! Deterministically narrows and orders the booking collection for the
//! admin list view: text search, categorical filters, date lower bound,
//! stable sort, then the page window. Every stage is a pure function of
//! `(records, state, now)`; the evaluation instant is passed in so one
//! render pass sees one consistent clock.
//!
//! Malformed filter input never errors: unknown buckets, sort keys and
//! status values all normalize to "no filter"/defaults at parse time.

mod pipeline;

pub use pipeline::Pipeline;

use serde::{Deserialize, Serialize};

use shared::models::BookingStatus;

use crate::utils::time::local_day_start_millis;

const DAY_MS: i64 = 86_400_000;

/// Sentinel wire value that disables a categorical filter
pub const FILTER_ALL: &str = "all";

/// Date-range bucket for the scheduled-date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateRange {
    /// No lower bound
    #[default]
    AllTime,
    /// Local midnight of the current business day onwards
    Today,
    Last7Days,
    Last30Days,
}

impl DateRange {
    /// Parse a wire value; unknown input falls back to no filter
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => DateRange::Today,
            "7d" | "last7" | "last_7_days" => DateRange::Last7Days,
            "30d" | "last30" | "last_30_days" => DateRange::Last30Days,
            _ => DateRange::AllTime,
        }
    }

    /// Inclusive lower bound in millis; `None` = unbounded
    ///
    /// "Today" starts at local midnight in the business timezone; the
    /// rolling buckets measure back from `now`.
    pub fn lower_bound(self, now: i64, tz: chrono_tz::Tz) -> Option<i64> {
        match self {
            DateRange::AllTime => None,
            DateRange::Today => Some(local_day_start_millis(now, tz)),
            DateRange::Last7Days => Some(now - 7 * DAY_MS),
            DateRange::Last30Days => Some(now - 30 * DAY_MS),
        }
    }
}

/// Sort key; exactly one active at a time, direction baked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl SortKey {
    /// Parse a wire value; unknown input falls back to the default sort
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "date_desc" => SortKey::DateDesc,
            "date_asc" => SortKey::DateAsc,
            "amount_desc" => SortKey::AmountDesc,
            "amount_asc" => SortKey::AmountAsc,
            _ => SortKey::DateDesc,
        }
    }
}

/// Parse a status filter value; `"all"` and anything unparseable disable
/// the filter
pub fn parse_status_filter(s: &str) -> Option<BookingStatus> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(FILTER_ALL) {
        return None;
    }
    s.parse().ok()
}

/// Parse a tour filter value; `"all"` and empty disable the filter
pub fn parse_tour_filter(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(FILTER_ALL) {
        return None;
    }
    Some(s.to_string())
}

/// Per-view-session query state
///
/// Filters and page number are coupled: every filter mutation resets the
/// page to 1. A stale page after a filter change is a correctness bug,
/// not cosmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingListState {
    pub q: String,
    pub status: Option<BookingStatus>,
    pub tour: Option<String>,
    pub range: DateRange,
    pub sort: SortKey,
    /// 1-based; clamped to the valid range when the pipeline runs
    pub page: usize,
}

impl Default for BookingListState {
    fn default() -> Self {
        Self {
            q: String::new(),
            status: None,
            tour: None,
            range: DateRange::AllTime,
            sort: SortKey::DateDesc,
            page: 1,
        }
    }
}

impl BookingListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, q: impl Into<String>) {
        self.q = q.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<BookingStatus>) {
        self.status = status;
        self.page = 1;
    }

    pub fn set_tour(&mut self, tour: Option<String>) {
        self.tour = tour;
        self.page = 1;
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.page = 1;
    }

    /// Sorting reorders the same result set; the page stays put
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// One page window of a filtered/sorted collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Filtered count (before paging)
    pub total: usize,
    /// Effective page after clamping
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}
