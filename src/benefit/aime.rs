//! Top-earnings selection and average indexed monthly earnings

use serde::{Deserialize, Serialize};

use super::adjusted::AdjustedEarnings;
use super::params::FormulaParameters;

/// Sum of the top adjusted years and the resulting AIME
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimeResult {
    pub top_sum: f64,
    pub aime: f64,
    /// Number of years actually summed (fewer than the lookback for short careers)
    pub years_counted: usize,
}

/// The `count` largest adjusted amounts, highest first
///
/// Works on a copy; the adjusted earnings are left untouched.
pub fn top_earnings(adjusted: &AdjustedEarnings, count: usize) -> Vec<f64> {
    let mut values: Vec<f64> = adjusted.values().collect();
    values.sort_unstable_by(|a, b| b.total_cmp(a));
    values.truncate(count);
    values
}

/// Average the top `lookback_years` adjusted years over the full lookback period in months
///
/// The divisor never shrinks for short careers.
pub fn average_indexed_monthly_earnings(
    adjusted: &AdjustedEarnings,
    params: &FormulaParameters,
) -> AimeResult {
    let top = top_earnings(adjusted, params.lookback_years);
    if top.len() < params.lookback_years {
        log::warn!(
            "Only {} years of earnings available; averaging over {} years regardless",
            top.len(),
            params.lookback_years
        );
    }

    let top_sum = top.iter().fold(0.0, |acc, v| acc + v);
    AimeResult {
        top_sum,
        aime: top_sum / params.aime_divisor(),
        years_counted: top.len(),
    }
}
