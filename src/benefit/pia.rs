//! Bend points and the primary insurance amount (normal monthly benefit)
//!
//! The PIA is piecewise linear in the AIME with two bend points scaled from
//! their 1977 amounts by the current wage index:
//!
//! ```text
//! PIA = 0.90 * min(AIME, b1)
//!     + 0.32 * clamp(AIME - b1, 0, b2 - b1)
//!     + 0.15 * max(AIME - b2, 0)
//! ```
//!
//! The result is floored to the next lower multiple of 0.10.

use serde::{Deserialize, Serialize};

use super::params::FormulaParameters;

/// Bend points and the resulting normal monthly benefit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PiaResult {
    pub first_bend_point: f64,
    pub second_bend_point: f64,
    pub normal_monthly_benefit: f64,
}

/// Round down to the nearest 0.10
pub fn floor_to_dime(amount: f64) -> f64 {
    (amount * 10.0).floor() / 10.0
}

/// Bend points for the given current wage index, rounded to whole currency units
pub fn bend_points(current_index: f64, params: &FormulaParameters) -> (f64, f64) {
    let scale = current_index / params.bend_point_base_index;
    (
        (params.first_bend_amount * scale).round(),
        (params.second_bend_amount * scale).round(),
    )
}

/// Piecewise benefit before rounding
pub fn unrounded_benefit(aime: f64, first: f64, second: f64, params: &FormulaParameters) -> f64 {
    if aime <= first {
        params.first_rate * aime
    } else if aime <= second {
        params.first_rate * first + params.second_rate * (aime - first)
    } else {
        params.first_rate * first
            + params.second_rate * (second - first)
            + params.third_rate * (aime - second)
    }
}

/// Compute bend points and the floored normal monthly benefit
pub fn primary_insurance_amount(aime: f64, current_index: f64, params: &FormulaParameters) -> PiaResult {
    let (first_bend_point, second_bend_point) = bend_points(current_index, params);
    let benefit = unrounded_benefit(aime, first_bend_point, second_bend_point, params);

    PiaResult {
        first_bend_point,
        second_bend_point,
        normal_monthly_benefit: floor_to_dime(benefit),
    }
}
