use super::{rent::round_half_up, Listing};
use serde::Serialize;
use std::collections::HashSet;

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_deals: usize,
    /// Mean yearly savings per active listing, in whole dollars.
    pub average_savings: i64,
    pub total_emails: usize,
    pub cities_covered: usize,
}

impl Stats {
    /// Aggregates over active listings only. Signups are counted in full.
    pub fn compute(deals: &[Listing], total_emails: usize) -> Self {
        let active: Vec<&Listing> = deals.iter().filter(|deal| deal.is_active).collect();

        if active.is_empty() {
            return Self {
                total_emails,
                ..Self::default()
            };
        }

        let total_monthly_savings: i128 = active
            .iter()
            .map(|deal| i128::from(deal.monthly_savings()))
            .sum();
        let cities: HashSet<String> = active.iter().map(|deal| deal.city.to_lowercase()).collect();

        Self {
            total_deals: active.len(),
            average_savings: round_half_up(
                total_monthly_savings as f64 / active.len() as f64 * MONTHS_PER_YEAR,
            ),
            total_emails,
            cities_covered: cities.len(),
        }
    }
}
