use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const DEFAULT_LEASE_TERM_MONTHS: u32 = 12;

const WEEKS_PER_MONTH: f64 = 4.0;

static WEEKS_FREE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)\s+weeks?\s+free").unwrap());
static MONTHS_FREE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)\s+months?\s+free").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub monthly_savings: i64,
    pub total_savings: i64,
    pub percentage_savings: i64,
}

/// Number of free months encoded in a move-in special, e.g. `8 weeks free`
/// is two months. Only the first "weeks free" phrase is considered, and only
/// when there is none does a "months free" phrase count. Anything else
/// (flat discounts, waived fees) is worth nothing here.
pub fn free_months(deal_description: &str) -> f64 {
    if let Some(weeks) = first_count(&WEEKS_FREE, deal_description) {
        weeks / WEEKS_PER_MONTH
    } else if let Some(months) = first_count(&MONTHS_FREE, deal_description) {
        months
    } else {
        0.0
    }
}

/// Average monthly rent once the free period is spread over the lease.
///
/// The result is not clamped: a free period as long as the lease yields zero
/// or less, which callers should treat as bad data rather than a discount.
/// A zero-month lease has nothing to spread over and keeps the regular rent.
pub fn effective_rent(regular_rent: i64, deal_description: &str, lease_term_months: u32) -> i64 {
    if lease_term_months == 0 {
        return regular_rent;
    }

    let term = f64::from(lease_term_months);
    let total_paid = regular_rent as f64 * (term - free_months(deal_description));

    round_half_up(total_paid / term)
}

/// Saturates instead of overflowing on absurd stored rents.
pub fn savings(regular_rent: i64, effective_rent: i64, lease_term_months: u32) -> Savings {
    let monthly_savings = regular_rent.saturating_sub(effective_rent);
    let percentage_savings = if regular_rent == 0 {
        0
    } else {
        round_half_up(monthly_savings as f64 / regular_rent as f64 * 100.0)
    };

    Savings {
        monthly_savings,
        total_savings: monthly_savings.saturating_mul(i64::from(lease_term_months)),
        percentage_savings,
    }
}

/// Rounds to the nearest integer with exact halves going towards positive
/// infinity, so `-2.5` becomes `-2`. Values outside the `i64` range
/// saturate at its bounds.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn first_count(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|count| count.as_str().parse().ok())
}
