//! Error types for the benefit calculation and its data sources

use crate::Year;

/// Malformed or missing input data detected while running the calculation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("wage index series is empty")]
    EmptyWageIndex,

    #[error("wage index for {year} must be positive, got {value}")]
    NonPositiveWageIndex { year: Year, value: f64 },

    #[error("no indexing factor available for earnings year {year}")]
    MissingFactor { year: Year },

    #[error("no wage index value for {year}")]
    MissingWageIndex { year: Year },

    #[error("formula parameter {name} is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Rejected earnings-history estimate request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("age must be greater than 22, got {age}")]
    AgeTooYoung { age: u32 },

    #[error("age {age} is too large to place a career start year")]
    AgeOutOfRange { age: u32 },

    #[error("last year worked ({last_year_worked}) cannot be after the current year ({current_year})")]
    LastYearInFuture { last_year_worked: Year, current_year: Year },

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Failure reading an earnings record or wage index series
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid year '{0}'")]
    InvalidYear(String),

    #[error("year {0} appears more than once")]
    DuplicateYear(Year),

    #[error(transparent)]
    Data(#[from] DataError),
}
