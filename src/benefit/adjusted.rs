//! Wage-indexed (adjusted) earnings

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::factors::IndexingFactors;
use crate::earnings::EarningsRecord;
use crate::error::DataError;
use crate::Year;

/// Earnings multiplied by their year's indexing factor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdjustedEarnings {
    adjusted: BTreeMap<Year, f64>,
}

impl AdjustedEarnings {
    pub fn get(&self, year: Year) -> Option<f64> {
        self.adjusted.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.adjusted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjusted.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, f64)> + '_ {
        self.adjusted.iter().map(|(&y, &v)| (y, v))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.adjusted.values().copied()
    }
}

/// Index every year of `record`; a year with no factor is a data error
pub fn adjusted_earnings(
    record: &EarningsRecord,
    factors: &IndexingFactors,
) -> Result<AdjustedEarnings, DataError> {
    let adjusted = record
        .iter()
        .map(|(year, amount)| {
            let factor = factors.get(year).ok_or(DataError::MissingFactor { year })?;
            Ok((year, amount * factor))
        })
        .collect::<Result<BTreeMap<_, _>, DataError>>()?;

    Ok(AdjustedEarnings { adjusted })
}
