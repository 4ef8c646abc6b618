//! Benefit calculation output and its text report

use std::fmt;

use serde::{Deserialize, Serialize};

use super::adjusted::AdjustedEarnings;
use super::factors::IndexingFactors;
use crate::earnings::EarningsRecord;

/// Width of the label column, padded with underscores
const LABEL_WIDTH: usize = 43;

/// Final figures of one benefit calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenefitResult {
    pub top_sum: f64,
    pub average_indexed_monthly_earnings: f64,
    pub first_bend_point: f64,
    pub second_bend_point: f64,
    pub normal_monthly_benefit: f64,
    pub normal_annual_benefit: f64,
    pub reduced_monthly_benefit: f64,
    pub reduced_annual_benefit: f64,
}

impl BenefitResult {
    /// Labelled rows in report order
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("Top 35 Years of Adjusted Earnings", self.top_sum),
            ("Average Indexed Monthly Earnings (AIME)", self.average_indexed_monthly_earnings),
            ("First Bend Point", self.first_bend_point),
            ("Second Bend Point", self.second_bend_point),
            ("Normal Monthly Benefit", self.normal_monthly_benefit),
            ("Normal Annual Benefit", self.normal_annual_benefit),
            ("Reduced (70%) Monthly Benefit", self.reduced_monthly_benefit),
            ("Reduced (70%) Annual Benefit", self.reduced_annual_benefit),
        ]
    }

    /// Eight lines: label padded with `_`, then an 11-wide value with two decimals
    pub fn report(&self) -> String {
        self.rows()
            .iter()
            .map(|(label, value)| {
                let padded = format!("{} ", label);
                format!("{:_<width$}{:11.2}\n", padded, value, width = LABEL_WIDTH)
            })
            .collect()
    }
}

impl fmt::Display for BenefitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report())
    }
}

/// Intermediate per-year values behind a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetail {
    pub factors: IndexingFactors,
    pub adjusted: AdjustedEarnings,
    pub years_counted: usize,
    pub result: BenefitResult,
}

impl CalculationDetail {
    /// Year-by-year table of raw earnings, factor and adjusted earnings
    pub fn year_table(&self, record: &EarningsRecord) -> String {
        let mut out = format!("{:>6} {:>14} {:>10} {:>14}\n", "Year", "Earnings", "Factor", "Adjusted");
        out.push_str(&"-".repeat(47));
        out.push('\n');
        for (year, adjusted) in self.adjusted.iter() {
            let earnings = record.get(year).unwrap_or(0.0);
            let factor = self.factors.get(year).unwrap_or(0.0);
            out.push_str(&format!("{:>6} {:>14.2} {:>10.6} {:>14.2}\n", year, earnings, factor, adjusted));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BenefitResult {
        BenefitResult {
            top_sum: 2_151_527.83,
            average_indexed_monthly_earnings: 5_122.69,
            first_bend_point: 1174.0,
            second_bend_point: 7078.0,
            normal_monthly_benefit: 2320.1,
            normal_annual_benefit: 27_841.2,
            reduced_monthly_benefit: 1624.0,
            reduced_annual_benefit: 19_488.0,
        }
    }

    #[test]
    fn test_report_layout() {
        let report = sample().report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Top 35 Years of Adjusted Earnings _________ 2151527.83");
        assert_eq!(lines[2], "First Bend Point __________________________    1174.00");
        assert_eq!(lines[6], "Reduced (70%) Monthly Benefit _____________    1624.00");
        for line in lines {
            assert_eq!(line.len(), LABEL_WIDTH + 11);
        }
    }

    #[test]
    fn test_display_matches_report() {
        assert_eq!(sample().to_string(), sample().report());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["normal_monthly_benefit"], 2320.1);
        assert_eq!(json["first_bend_point"], 1174.0);
    }
}
