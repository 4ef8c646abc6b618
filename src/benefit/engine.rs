//! Benefit calculator: runs the indexing, averaging and benefit formula stages in order

use super::adjusted::adjusted_earnings;
use super::aime::average_indexed_monthly_earnings;
use super::factors::indexing_factors;
use super::params::FormulaParameters;
use super::pia::primary_insurance_amount;
use super::reduction::reduced_benefit;
use super::result::{BenefitResult, CalculationDetail};
use crate::earnings::EarningsRecord;
use crate::error::DataError;
use crate::wage_index::WageIndexSeries;

/// Computes benefit estimates against a fixed wage index series and formula
#[derive(Debug, Clone)]
pub struct BenefitCalculator {
    wage_index: WageIndexSeries,
    params: FormulaParameters,
}

impl BenefitCalculator {
    pub fn new(wage_index: WageIndexSeries, params: FormulaParameters) -> Self {
        Self { wage_index, params }
    }

    /// Calculator using the built-in NAWI series and the standard formula
    pub fn with_nawi() -> Self {
        Self::new(WageIndexSeries::nawi(), FormulaParameters::default())
    }

    pub fn wage_index(&self) -> &WageIndexSeries {
        &self.wage_index
    }

    /// Run the full calculation for one earnings record
    pub fn calculate(&self, record: &EarningsRecord) -> Result<BenefitResult, DataError> {
        self.calculate_detailed(record).map(|detail| detail.result)
    }

    /// Run the full calculation, keeping the per-year factors and adjusted earnings
    ///
    /// An empty record yields an all-zero result.
    pub fn calculate_detailed(&self, record: &EarningsRecord) -> Result<CalculationDetail, DataError> {
        self.params.validate()?;
        let (last_index_year, current_index) = self.wage_index.latest()?;
        let last_earnings_year = record.last_year().unwrap_or(last_index_year);

        let factors = indexing_factors(&self.wage_index, last_earnings_year)?;
        let adjusted = adjusted_earnings(record, &factors)?;
        let aime = average_indexed_monthly_earnings(&adjusted, &self.params);
        let pia = primary_insurance_amount(aime.aime, current_index, &self.params);
        let reduced = reduced_benefit(pia.normal_monthly_benefit, &self.params);

        log::debug!(
            "AIME {:.2} from {} years, bend points {}/{}, PIA {:.2}",
            aime.aime,
            aime.years_counted,
            pia.first_bend_point,
            pia.second_bend_point,
            pia.normal_monthly_benefit
        );

        let result = BenefitResult {
            top_sum: aime.top_sum,
            average_indexed_monthly_earnings: aime.aime,
            first_bend_point: pia.first_bend_point,
            second_bend_point: pia.second_bend_point,
            normal_monthly_benefit: pia.normal_monthly_benefit,
            normal_annual_benefit: pia.normal_monthly_benefit * 12.0,
            reduced_monthly_benefit: reduced,
            reduced_annual_benefit: reduced * 12.0,
        };

        Ok(CalculationDetail {
            factors,
            adjusted,
            years_counted: aime.years_counted,
            result,
        })
    }
}

impl Default for BenefitCalculator {
    fn default() -> Self {
        Self::with_nawi()
    }
}
