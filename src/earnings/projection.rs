//! Extend an earnings record into future years with compound growth

use super::EarningsRecord;

/// Append `years` future years after the record's last year
///
/// Year `last + k` receives `round(last_amount * (1 + annual_growth)^k)`.
/// An empty record is returned unchanged.
pub fn project_earnings(record: &EarningsRecord, years: u32, annual_growth: f64) -> EarningsRecord {
    let Some((last_year, last_amount)) = record.latest() else {
        return record.clone();
    };

    // Stops early if the year count would run past the representable years
    let projected = (1..=years).map_while(|k| {
        let k = i32::try_from(k).ok()?;
        let year = last_year.checked_add(k)?;
        let amount = last_amount * (1.0 + annual_growth).powi(k);
        Some((year, amount.round()))
    });

    record.extended_with(projected)
}

/// Constant annual rate that grows `start` into `end` over `years` years
pub fn implied_growth_rate(start: f64, end: f64, years: u32) -> f64 {
    if years == 0 || start <= 0.0 {
        return 0.0;
    }
    (end / start).powf(1.0 / years as f64) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_compounds_from_last_year() {
        let record: EarningsRecord = [(2020, 100_000.0), (2021, 108_494.0)].into_iter().collect();
        let projected = project_earnings(&record, 3, 0.02);

        assert_eq!(projected.len(), 5);
        assert_eq!(projected.get(2021), Some(108_494.0));
        assert_eq!(projected.get(2022), Some(110_664.0));
        assert_eq!(projected.get(2023), Some(112_877.0));
        assert_eq!(projected.last_year(), Some(2024));
    }

    #[test]
    fn test_projection_of_empty_record() {
        let projected = project_earnings(&EarningsRecord::default(), 10, 0.05);
        assert!(projected.is_empty());
    }

    #[test]
    fn test_zero_years_is_identity() {
        let record: EarningsRecord = [(2020, 1.0)].into_iter().collect();
        assert_eq!(project_earnings(&record, 0, 0.1), record);
    }

    #[test]
    fn test_projection_stops_at_last_representable_year() {
        let record: EarningsRecord = [(i32::MAX - 2, 1_000.0)].into_iter().collect();
        let projected = project_earnings(&record, 10, 0.0);

        assert_eq!(projected.len(), 3);
        assert_eq!(projected.last_year(), Some(i32::MAX));
        assert_eq!(projected.get(i32::MAX), Some(1_000.0));
    }

    #[test]
    fn test_implied_growth_rate() {
        // Doubling over three years
        let rate = implied_growth_rate(500.0, 1000.0, 3);
        assert_relative_eq!(rate, 2f64.powf(1.0 / 3.0) - 1.0, epsilon = 1e-12);
        assert_relative_eq!(500.0 * (1.0 + rate).powi(3), 1000.0, epsilon = 1e-9);
        assert_eq!(implied_growth_rate(0.0, 10.0, 3), 0.0);
    }
}
