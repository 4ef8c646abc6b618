//! Benefit Estimator - retirement benefit estimates from an annual earnings record
//!
//! This library provides:
//! - Wage indexing of historical earnings against a national average wage index
//! - Top-35-year AIME and the two-bend-point primary insurance amount
//! - A worst-case (70%) reduced benefit for early claiming
//! - Earnings history estimation and future-earnings projection
//! - CSV/JSON loaders and a batch scenario runner

pub mod error;
pub mod wage_index;
pub mod earnings;
pub mod benefit;
pub mod scenario;

/// Calendar year
pub type Year = i32;

// Re-export commonly used types
pub use error::{DataError, EstimateError, LoadError};
pub use wage_index::WageIndexSeries;
pub use earnings::EarningsRecord;
pub use benefit::{BenefitCalculator, BenefitResult, CalculationDetail, FormulaParameters};
pub use scenario::ScenarioRunner;
