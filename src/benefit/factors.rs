//! Wage-indexing factors by year

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::wage_index::WageIndexSeries;
use crate::Year;

/// Multiplier re-expressing each year's earnings at the latest average-wage level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexingFactors {
    factors: BTreeMap<Year, f64>,
}

impl IndexingFactors {
    pub fn get(&self, year: Year) -> Option<f64> {
        self.factors.get(&year).copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Year, f64)> + '_ {
        self.factors.iter().map(|(&y, &f)| (y, f))
    }
}

/// Compute indexing factors through `last_earnings_year`
///
/// Years before the last index year get `1 + (latest - index) / index`. The
/// last index year itself and every later year through `last_earnings_year`
/// get exactly 1.0. Years missing from a gapped series get no factor.
pub fn indexing_factors(
    index: &WageIndexSeries,
    last_earnings_year: Year,
) -> Result<IndexingFactors, DataError> {
    index.validate()?;
    let (last_index_year, latest) = index.latest()?;

    let mut factors: BTreeMap<Year, f64> = index
        .iter()
        .take_while(|&(year, _)| year < last_index_year)
        .map(|(year, value)| (year, 1.0 + (latest - value) / value))
        .collect();

    for year in last_index_year..=last_earnings_year {
        factors.insert(year, 1.0);
    }

    log::debug!(
        "Indexing factors for {} years, indexed to {} ({:.2})",
        factors.len(),
        last_index_year,
        latest
    );

    Ok(IndexingFactors { factors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factor_formula() {
        let index: WageIndexSeries = [(2000, 50.0), (2001, 80.0), (2002, 100.0)].into_iter().collect();
        let factors = indexing_factors(&index, 2002).unwrap();

        assert_relative_eq!(factors.get(2000).unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(factors.get(2001).unwrap(), 1.25, epsilon = 1e-12);
        assert_eq!(factors.get(2002), Some(1.0));
    }

    #[test]
    fn test_flat_after_last_index_year() {
        let factors = indexing_factors(&WageIndexSeries::nawi(), 2030).unwrap();
        for year in 2022..=2030 {
            assert_eq!(factors.get(year), Some(1.0), "year {}", year);
        }
        assert_eq!(factors.get(2031), None);
        assert_eq!(factors.get(1951).map(|f| f > 1.0), Some(true));
    }

    #[test]
    fn test_monotonic_for_increasing_index() {
        let nawi = WageIndexSeries::nawi();
        let (_, latest) = nawi.latest().unwrap();
        let factors = indexing_factors(&nawi, 2022).unwrap();
        for (year, value) in nawi.iter().filter(|&(y, _)| y < 2022) {
            if latest >= value {
                assert!(factors.get(year).unwrap() >= 1.0, "factor below 1.0 in {}", year);
            }
        }
    }

    #[test]
    fn test_last_index_year_without_later_earnings() {
        // Earnings end before the last index year: that year gets no factor
        let index: WageIndexSeries = [(2000, 50.0), (2001, 100.0)].into_iter().collect();
        let factors = indexing_factors(&index, 2000).unwrap();
        assert_eq!(factors.get(2001), None);
        assert_eq!(factors.len(), 1);
    }

    #[test]
    fn test_gapped_series_leaves_gaps() {
        let index: WageIndexSeries = [(1977, 9779.44), (2022, 9779.44)].into_iter().collect();
        let factors = indexing_factors(&index, 2022).unwrap();
        assert_eq!(factors.get(1977), Some(1.0));
        assert_eq!(factors.get(2000), None);
        assert_eq!(factors.get(2022), Some(1.0));
    }

    #[test]
    fn test_zero_index_is_error() {
        let index: WageIndexSeries = [(2000, 0.0), (2001, 100.0)].into_iter().collect();
        assert_eq!(
            indexing_factors(&index, 2001),
            Err(DataError::NonPositiveWageIndex { year: 2000, value: 0.0 })
        );
    }

    #[test]
    fn test_empty_index_is_error() {
        assert_eq!(
            indexing_factors(&WageIndexSeries::default(), 2001),
            Err(DataError::EmptyWageIndex)
        );
    }
}
