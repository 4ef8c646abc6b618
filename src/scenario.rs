//! Scenario runner for batches of earnings records
//!
//! Pre-loads the wage index and formula once, then runs many records or
//! growth-rate variants of one record without re-reading CSV files.

use std::path::Path;

use crate::benefit::{BenefitCalculator, BenefitResult, FormulaParameters};
use crate::earnings::{project_earnings, EarningsRecord};
use crate::error::{DataError, LoadError};
use crate::wage_index::{load_wage_index, WageIndexSeries};

/// Pre-loaded benefit calculator for batch runs
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv_path(Path::new("data/wage_index.csv"))?;
///
/// // Same career, different future growth assumptions
/// let results = runner.run_growth_scenarios(&record, 20, &[0.0, 0.02, 0.04]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    calculator: BenefitCalculator,
}

impl ScenarioRunner {
    /// Create runner with the built-in NAWI series and standard formula
    pub fn new() -> Self {
        Self {
            calculator: BenefitCalculator::with_nawi(),
        }
    }

    /// Create runner by loading the wage index from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        Ok(Self::with_wage_index(load_wage_index(path)?, FormulaParameters::default()))
    }

    /// Create runner with a pre-built wage index and formula
    pub fn with_wage_index(wage_index: WageIndexSeries, params: FormulaParameters) -> Self {
        Self {
            calculator: BenefitCalculator::new(wage_index, params),
        }
    }

    /// Calculate one record
    pub fn run(&self, record: &EarningsRecord) -> Result<BenefitResult, DataError> {
        self.calculator.calculate(record)
    }

    /// Calculate several records; each gets its own result
    pub fn run_batch(&self, records: &[EarningsRecord]) -> Vec<Result<BenefitResult, DataError>> {
        records.iter().map(|record| self.run(record)).collect()
    }

    /// Extend one record `years` into the future at each growth rate and calculate each
    pub fn run_growth_scenarios(
        &self,
        record: &EarningsRecord,
        years: u32,
        growth_rates: &[f64],
    ) -> Vec<Result<BenefitResult, DataError>> {
        growth_rates
            .iter()
            .map(|&rate| {
                log::debug!("Growth scenario {:.4} over {} years", rate, years);
                self.run(&project_earnings(record, years, rate))
            })
            .collect()
    }

    pub fn calculator(&self) -> &BenefitCalculator {
        &self.calculator
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(first: i32, last: i32, amount: f64) -> EarningsRecord {
        (first..=last).map(|y| (y, amount)).collect()
    }

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::new();
        let records = vec![
            career(1988, 2022, 30_000.0),
            career(1988, 2022, 60_000.0),
            [(1900, 1.0)].into_iter().collect(),
        ];

        let results = runner.run_batch(&records);
        assert_eq!(results.len(), 3);

        let low = results[0].as_ref().unwrap();
        let high = results[1].as_ref().unwrap();
        assert!(high.normal_monthly_benefit > low.normal_monthly_benefit);
        assert_eq!(results[2], Err(DataError::MissingFactor { year: 1900 }));
    }

    #[test]
    fn test_growth_scenarios() {
        let runner = ScenarioRunner::new();
        let record = career(2003, 2022, 50_000.0);

        let results = runner.run_growth_scenarios(&record, 15, &[0.0, 0.03, 0.06]);
        assert_eq!(results.len(), 3);

        let benefits: Vec<f64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().normal_monthly_benefit)
            .collect();

        // Higher future growth should never lower the benefit
        assert!(benefits[1] > benefits[0]);
        assert!(benefits[2] > benefits[1]);
    }

    #[test]
    fn test_from_csv_path() {
        let runner = ScenarioRunner::from_csv_path(Path::new("data/wage_index.csv")).unwrap();
        assert_eq!(runner.calculator().wage_index().last_year(), Some(2022));
    }
}
