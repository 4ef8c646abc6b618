//! Retirement benefit calculation
//!
//! The calculation is a linear pipeline over two inputs, an earnings record
//! and a wage index series:
//! 1. **Indexing factors**: scale each year to the latest average-wage level
//! 2. **Adjusted earnings**: earnings times the year's factor
//! 3. **AIME**: top 35 adjusted years averaged over 420 months
//! 4. **PIA**: two bend points, 90% / 32% / 15% tiers, floored to 0.10
//! 5. **Reduction**: worst-case early claiming at 70%, floored to 0.10
//!
//! Any data error aborts the whole calculation; no partial results are produced.
//!
//! # Example
//!
//! ```rust,ignore
//! use benefit_estimator::benefit::BenefitCalculator;
//! use benefit_estimator::earnings::load_earnings;
//!
//! let record = load_earnings("data/sample_earnings.csv")?;
//! let result = BenefitCalculator::with_nawi().calculate(&record)?;
//! print!("{}", result.report());
//! ```

mod params;
mod factors;
mod adjusted;
mod aime;
mod pia;
mod reduction;
mod result;
mod engine;

pub use params::{FormulaParameters, DEFAULT_LOOKBACK_YEARS, BEND_POINT_BASE_INDEX};
pub use factors::{indexing_factors, IndexingFactors};
pub use adjusted::{adjusted_earnings, AdjustedEarnings};
pub use aime::{average_indexed_monthly_earnings, top_earnings, AimeResult};
pub use pia::{bend_points, floor_to_dime, primary_insurance_amount, unrounded_benefit, PiaResult};
pub use reduction::reduced_benefit;
pub use result::{BenefitResult, CalculationDetail};
pub use engine::BenefitCalculator;
