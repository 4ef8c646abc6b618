//! Benefit formula parameters
//!
//! Defaults are the published constants of the primary insurance amount formula.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, LoadError};

/// Number of highest-earning years averaged into the AIME
pub const DEFAULT_LOOKBACK_YEARS: usize = 35;
/// 1977 national average wage index, the base the bend-point amounts are defined against
pub const BEND_POINT_BASE_INDEX: f64 = 9779.44;

/// Constants of the AIME / PIA formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaParameters {
    /// Years of top adjusted earnings counted (also fixes the AIME divisor)
    pub lookback_years: usize,

    /// Wage index level the bend-point amounts are expressed in
    pub bend_point_base_index: f64,
    /// First bend point at the base index level
    pub first_bend_amount: f64,
    /// Second bend point at the base index level
    pub second_bend_amount: f64,

    /// Replacement rate up to the first bend point
    pub first_rate: f64,
    /// Replacement rate between the bend points
    pub second_rate: f64,
    /// Replacement rate above the second bend point
    pub third_rate: f64,

    /// Worst-case early claiming factor applied to the normal benefit
    pub reduction_factor: f64,
}

impl Default for FormulaParameters {
    fn default() -> Self {
        Self {
            lookback_years: DEFAULT_LOOKBACK_YEARS,
            bend_point_base_index: BEND_POINT_BASE_INDEX,
            first_bend_amount: 180.0,
            second_bend_amount: 1085.0,
            first_rate: 0.90,
            second_rate: 0.32,
            third_rate: 0.15,
            reduction_factor: 0.70,
        }
    }
}

impl FormulaParameters {
    /// Months in the averaging period: 420 for the standard 35 years
    pub fn aime_divisor(&self) -> f64 {
        (self.lookback_years * 12) as f64
    }

    /// Check every constant is usable: a non-empty lookback, positive finite
    /// amounts and rates, and bend amounts in ascending order
    pub fn validate(&self) -> Result<(), DataError> {
        if self.lookback_years == 0 {
            return Err(DataError::InvalidParameter { name: "lookback_years", value: 0.0 });
        }

        let positive = [
            ("bend_point_base_index", self.bend_point_base_index),
            ("first_bend_amount", self.first_bend_amount),
            ("second_bend_amount", self.second_bend_amount),
            ("first_rate", self.first_rate),
            ("second_rate", self.second_rate),
            ("third_rate", self.third_rate),
            ("reduction_factor", self.reduction_factor),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(DataError::InvalidParameter { name, value });
            }
        }

        if self.first_bend_amount > self.second_bend_amount {
            return Err(DataError::InvalidParameter {
                name: "second_bend_amount",
                value: self.second_bend_amount,
            });
        }
        Ok(())
    }

    /// Load parameters from a JSON file; omitted fields keep their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let params: Self = serde_json::from_reader(BufReader::new(file))?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}
