//! Early-claiming reduction of the normal monthly benefit

use super::params::FormulaParameters;
use super::pia::floor_to_dime;

/// Worst-case reduced monthly benefit, floored to 0.10
pub fn reduced_benefit(normal_monthly_benefit: f64, params: &FormulaParameters) -> f64 {
    floor_to_dime(params.reduction_factor * normal_monthly_benefit)
}
