//! Annual earnings record keyed by year

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Year;

/// Covered earnings by calendar year, ordered by year
///
/// Years need not be contiguous. Amounts are taken as given; no plausibility
/// checks are applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EarningsRecord {
    earnings: BTreeMap<Year, f64>,
}

impl EarningsRecord {
    pub fn new(earnings: BTreeMap<Year, f64>) -> Self {
        Self { earnings }
    }

    pub fn get(&self, year: Year) -> Option<f64> {
        self.earnings.get(&year).copied()
    }

    pub fn first_year(&self) -> Option<Year> {
        self.earnings.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<Year> {
        self.earnings.keys().next_back().copied()
    }

    /// Most recent (year, amount) pair
    pub fn latest(&self) -> Option<(Year, f64)> {
        self.earnings.iter().next_back().map(|(&y, &v)| (y, v))
    }

    pub fn len(&self) -> usize {
        self.earnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earnings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, f64)> + '_ {
        self.earnings.iter().map(|(&y, &v)| (y, v))
    }

    /// Copy of this record with `extra` years added; years already present are kept
    pub fn extended_with<I: IntoIterator<Item = (Year, f64)>>(&self, extra: I) -> Self {
        let mut earnings = self.earnings.clone();
        for (year, amount) in extra {
            earnings.entry(year).or_insert(amount);
        }
        Self { earnings }
    }
}

impl FromIterator<(Year, f64)> for EarningsRecord {
    fn from_iter<I: IntoIterator<Item = (Year, f64)>>(iter: I) -> Self {
        Self {
            earnings: iter.into_iter().collect(),
        }
    }
}
