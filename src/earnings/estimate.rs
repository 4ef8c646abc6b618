//! Back-estimate a career earnings history from a single recent wage
//!
//! Working backwards from the last year worked, each earlier year's wage is
//! scaled down by the change in the average wage index between that year and
//! the next, and optionally by an individual growth rate. Earnings before age 21
//! are treated as part-time (one eighth of the following year).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::EarningsRecord;
use crate::error::{DataError, EstimateError};
use crate::wage_index::WageIndexSeries;
use crate::Year;

/// Divisor applied to the wage of the youth-transition year
pub const YOUTH_FACTOR: f64 = 8.0;
/// Age at which the youth divisor applies
pub const YOUTH_FACTOR_AGE: i32 = 21;
/// Age at which the estimated career starts
pub const WORK_START_AGE: i32 = 18;
/// Assumed wage ratio between the year before the current year and the current year
pub const PRIOR_YEAR_RATIO: f64 = 0.96;

/// Inputs to an earnings-history estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Current age in whole years (must be greater than 22)
    pub age: u32,
    /// Wage earned in `last_year_worked`
    pub last_wage: f64,
    /// Final year with earnings, at most `current_year`
    pub last_year_worked: Year,
    /// Individual annual earnings growth on top of wage-index growth
    pub growth_rate: f64,
    /// Calendar year the estimate is made in
    pub current_year: Year,
}

impl EstimateRequest {
    /// Request for someone still working in `current_year` with no individual growth
    pub fn new(age: u32, last_wage: f64, current_year: Year) -> Self {
        Self {
            age,
            last_wage,
            last_year_worked: current_year,
            growth_rate: 0.0,
            current_year,
        }
    }

    pub fn with_last_year_worked(mut self, year: Year) -> Self {
        self.last_year_worked = year;
        self
    }

    pub fn with_growth_rate(mut self, rate: f64) -> Self {
        self.growth_rate = rate;
        self
    }

    /// Calendar year in which the person reached `age_at`
    fn year_at_age(&self, age_at: i32) -> Result<Year, EstimateError> {
        i32::try_from(self.age)
            .ok()
            .and_then(|age| self.current_year.checked_sub(age))
            .and_then(|birth_year| birth_year.checked_add(age_at))
            .ok_or(EstimateError::AgeOutOfRange { age: self.age })
    }

    fn work_start_year(&self) -> Result<Year, EstimateError> {
        self.year_at_age(WORK_START_AGE)
    }

    fn youth_year(&self) -> Result<Year, EstimateError> {
        self.year_at_age(YOUTH_FACTOR_AGE)
    }
}

/// Ratio of `year`'s average wage to the following year's
fn reduction_factor(year: Year, current_year: Year, index: &WageIndexSeries) -> Result<f64, DataError> {
    let prior_year = year.checked_sub(1);
    if year == current_year {
        let prior_year = prior_year.ok_or(DataError::MissingWageIndex { year })?;
        index
            .get(prior_year)
            .ok_or(DataError::MissingWageIndex { year: prior_year })?;
        return Ok(1.0);
    }
    if current_year.checked_sub(1) == Some(year) {
        return Ok(PRIOR_YEAR_RATIO);
    }

    let this_year = index.get(year).ok_or(DataError::MissingWageIndex { year })?;
    let following_year = year.checked_add(1).ok_or(DataError::MissingWageIndex { year })?;
    let next_year = index
        .get(following_year)
        .ok_or(DataError::MissingWageIndex { year: following_year })?;
    if next_year <= 0.0 {
        return Err(DataError::NonPositiveWageIndex { year: following_year, value: next_year });
    }
    Ok(this_year / next_year)
}

/// Estimate annual earnings from the start of work (age 18) through `last_year_worked`
pub fn estimate_earnings(
    request: &EstimateRequest,
    index: &WageIndexSeries,
) -> Result<EarningsRecord, EstimateError> {
    if request.age <= 22 {
        return Err(EstimateError::AgeTooYoung { age: request.age });
    }
    if request.last_year_worked > request.current_year {
        return Err(EstimateError::LastYearInFuture {
            last_year_worked: request.last_year_worked,
            current_year: request.current_year,
        });
    }

    let start_year = request.work_start_year()?;
    let youth_year = request.youth_year()?;
    let mut wages = BTreeMap::new();
    let mut following = request.last_wage;

    for year in (start_year..=request.last_year_worked).rev() {
        if year == request.last_year_worked {
            if year == request.current_year {
                reduction_factor(year, request.current_year, index)?;
            }
            wages.insert(year, request.last_wage);
            continue;
        }

        let reduction = reduction_factor(year, request.current_year, index)? / (1.0 + request.growth_rate);
        let youth = if year == youth_year { YOUTH_FACTOR } else { 1.0 };
        let wage = following * reduction / youth;
        wages.insert(year, wage);
        following = wage;
    }

    log::debug!(
        "Estimated {} years of earnings ({}..={})",
        wages.len(),
        start_year,
        request.last_year_worked
    );

    Ok(EarningsRecord::new(wages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_index(first: Year, last: Year) -> WageIndexSeries {
        (first..=last).map(|y| (y, 100.0)).collect()
    }

    #[test]
    fn test_flat_index_history() {
        let request = EstimateRequest::new(30, 50_000.0, 2024);
        let record = estimate_earnings(&request, &flat_index(2012, 2023)).unwrap();

        assert_eq!(record.first_year(), Some(2012));
        assert_eq!(record.last_year(), Some(2024));
        assert_eq!(record.get(2024), Some(50_000.0));
        assert_relative_eq!(record.get(2023).unwrap(), 48_000.0, epsilon = 1e-9);
        assert_relative_eq!(record.get(2016).unwrap(), 48_000.0, epsilon = 1e-9);
        // Year turning 21 drops to part-time earnings
        assert_relative_eq!(record.get(2015).unwrap(), 6_000.0, epsilon = 1e-9);
        assert_relative_eq!(record.get(2012).unwrap(), 6_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_growth_rate_discounts_each_year() {
        let request = EstimateRequest::new(30, 50_000.0, 2024).with_growth_rate(0.25);
        let record = estimate_earnings(&request, &flat_index(2012, 2023)).unwrap();

        assert_relative_eq!(record.get(2023).unwrap(), 38_400.0, epsilon = 1e-9);
        assert_relative_eq!(record.get(2022).unwrap(), 30_720.0, epsilon = 1e-9);
    }

    #[test]
    fn test_index_ratio_applied() {
        let index: WageIndexSeries = [(2019, 90.0), (2020, 100.0), (2021, 100.0)].into_iter().collect();
        let request = EstimateRequest::new(40, 1_000.0, 2024).with_last_year_worked(2020);
        let record = estimate_earnings(&request, &index);

        // 2019 is scaled by 90/100; 2018 has no index value
        assert!(matches!(
            record,
            Err(EstimateError::Data(DataError::MissingWageIndex { year: 2018 }))
        ));

        let index: WageIndexSeries = (2002..=2020).map(|y| (y, if y == 2019 { 90.0 } else { 100.0 })).collect();
        let record = estimate_earnings(&request, &index).unwrap();
        assert_relative_eq!(record.get(2019).unwrap(), 900.0, epsilon = 1e-9);
        assert_relative_eq!(record.get(2018).unwrap(), 1_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_young_age() {
        let request = EstimateRequest::new(22, 10_000.0, 2024);
        assert_eq!(
            estimate_earnings(&request, &flat_index(2000, 2023)),
            Err(EstimateError::AgeTooYoung { age: 22 })
        );
    }

    #[test]
    fn test_rejects_future_last_year() {
        let request = EstimateRequest::new(40, 10_000.0, 2024).with_last_year_worked(2025);
        assert_eq!(
            estimate_earnings(&request, &flat_index(2000, 2023)),
            Err(EstimateError::LastYearInFuture { last_year_worked: 2025, current_year: 2024 })
        );
    }

    #[test]
    fn test_age_beyond_year_range_is_error() {
        let age = u32::MAX / 2 + 1;
        let request = EstimateRequest::new(age, 10_000.0, 2024);
        assert_eq!(
            estimate_earnings(&request, &flat_index(2000, 2023)),
            Err(EstimateError::AgeOutOfRange { age })
        );

        let request = EstimateRequest::new(u32::MAX, 10_000.0, 2024);
        assert_eq!(
            estimate_earnings(&request, &flat_index(2000, 2023)),
            Err(EstimateError::AgeOutOfRange { age: u32::MAX })
        );
    }

    #[test]
    fn test_requires_prior_year_index_when_working_now() {
        let request = EstimateRequest::new(40, 10_000.0, 2024);
        assert_eq!(
            estimate_earnings(&request, &flat_index(2000, 2022)),
            Err(EstimateError::Data(DataError::MissingWageIndex { year: 2023 }))
        );
    }
}
