//! Earnings records, loading, back-estimation and forward projection

mod record;
pub mod loader;
pub mod estimate;
pub mod projection;

pub use record::EarningsRecord;
pub use loader::{load_earnings, load_earnings_csv_from_reader, load_earnings_json_from_reader};
pub use estimate::{estimate_earnings, EstimateRequest};
pub use projection::{project_earnings, implied_growth_rate};
