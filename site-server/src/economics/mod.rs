//! Derived deal fields
//!
//! Presentation-only values computed from stored fields and a
//! caller-supplied instant. Nothing here is persisted and every function
//! is total: degenerate prices and past end-dates produce defined values,
//! never errors, because these run on every render tick of a live
//! countdown.

mod countdown;

pub use countdown::Countdown;

use rust_decimal::prelude::*;

use shared::models::Deal;
use shared::money::Money;

/// Rounded discount percentage, clamped at 0
///
/// `round(max(0, (original − sale) / original) × 100)` with half-up
/// rounding. An original price of zero (or below) is degenerate input and
/// reads as "not discounted" so the pipeline stays total.
pub fn discount_percent(original: Money, sale: Money) -> u32 {
    if original.minor <= 0 || original.currency != sale.currency {
        return 0;
    }
    let spread = (original.minor - sale.minor).max(0);
    let pct = (Decimal::from(spread) * Decimal::from(100) / Decimal::from(original.minor))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    pct.to_u32().unwrap_or(0)
}

/// Active-deal predicate
///
/// Active iff the validity window contains `now` (absent bounds are
/// open) and the sale price is strictly below the original. `now` comes
/// from the caller so one render pass is internally consistent.
pub fn is_active(deal: &Deal, now: i64) -> bool {
    let after_start = deal.starts_at.is_none_or(|s| now >= s);
    let before_end = deal.ends_at.is_none_or(|e| now <= e);
    let priced_below = deal.sale_price.currency == deal.original_price.currency
        && deal.sale_price.minor < deal.original_price.minor;
    after_start && before_end && priced_below
}

/// Urgency flag: remaining time strictly positive and within the threshold
///
/// Styling only, never used to filter the deal list.
pub fn ends_soon(deal: &Deal, now: i64, threshold_ms: i64) -> bool {
    match deal.ends_at {
        Some(ends_at) => {
            let remaining = ends_at - now;
            remaining > 0 && remaining <= threshold_ms
        }
        None => false,
    }
}
