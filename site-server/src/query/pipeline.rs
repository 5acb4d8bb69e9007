//! Pipeline execution
//!
//! Filter, then sort, then paginate, with no side effects and no clock
//! reads.

use chrono_tz::Tz;

use shared::models::Booking;

use super::{BookingListState, Page, SortKey};
use crate::utils::{AppError, AppResult};

/// Booking list pipeline
///
/// Page size and business timezone are fixed per deployment; a page size
/// of zero is a configuration error and is rejected here, once, so the
/// per-request path never has to.
#[derive(Debug, Clone)]
pub struct Pipeline {
    page_size: usize,
    tz: Tz,
}

impl Pipeline {
    pub fn new(page_size: usize, tz: Tz) -> AppResult<Self> {
        if page_size == 0 {
            return Err(AppError::internal("page size must be positive"));
        }
        Ok(Self { page_size, tz })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Run the full pipeline and slice one page window
    ///
    /// An empty filtered result is a valid terminal state: one page of
    /// zero items, never an error. An out-of-range page clamps.
    pub fn run(&self, records: &[Booking], state: &BookingListState, now: i64) -> Page<Booking> {
        let filtered = self.filter_and_sort(records, state, now);

        let total = filtered.len();
        let total_pages = total.div_ceil(self.page_size).max(1);
        let page = state.page.clamp(1, total_pages);
        let start = (page - 1) * self.page_size;
        let items = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        Page {
            items,
            total,
            page,
            page_size: self.page_size,
            total_pages,
        }
    }

    /// Filters and sort only; the export sink wants the whole ordered
    /// result, in the same order the list view shows it
    pub fn run_unpaged(
        &self,
        records: &[Booking],
        state: &BookingListState,
        now: i64,
    ) -> Vec<Booking> {
        self.filter_and_sort(records, state, now)
            .into_iter()
            .cloned()
            .collect()
    }

    fn filter_and_sort<'a>(
        &self,
        records: &'a [Booking],
        state: &BookingListState,
        now: i64,
    ) -> Vec<&'a Booking> {
        let lower = state.range.lower_bound(now, self.tz);
        let needle = state.q.trim().to_lowercase();

        // All active predicates combine with AND
        let mut filtered: Vec<&Booking> = records
            .iter()
            .filter(|b| matches_text(b, &needle))
            .filter(|b| state.status.is_none_or(|s| b.status == s))
            .filter(|b| state.tour.as_deref().is_none_or(|t| b.tour_id == t))
            .filter(|b| lower.is_none_or(|bound| b.scheduled_at >= bound))
            .collect();

        // slice::sort_by is stable: equal keys keep input order
        match state.sort {
            SortKey::DateDesc => filtered.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at)),
            SortKey::DateAsc => filtered.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at)),
            SortKey::AmountDesc => filtered.sort_by(|a, b| b.amount.minor.cmp(&a.amount.minor)),
            SortKey::AmountAsc => filtered.sort_by(|a, b| a.amount.minor.cmp(&b.amount.minor)),
        }

        filtered
    }
}

/// Case-insensitive substring match over the searchable fields
///
/// Empty query matches everything.
fn matches_text(b: &Booking, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {}",
        b.customer_name, b.email, b.tour_id, b.id
    )
    .to_lowercase();
    haystack.contains(needle)
}
