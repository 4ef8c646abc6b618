//! Benefit Estimator CLI
//!
//! Calculates the estimated normal and reduced retirement benefit for an earnings record

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use benefit_estimator::earnings::{load_earnings, project_earnings};
use benefit_estimator::wage_index::load_wage_index;
use benefit_estimator::{BenefitCalculator, FormulaParameters, WageIndexSeries};

#[derive(Parser)]
#[command(name = "benefit_estimator")]
#[command(about = "Estimate retirement benefits from an annual earnings record")]
struct Cli {
    /// Earnings record (CSV with Year,Earnings header, or JSON object of year -> amount)
    #[arg(short, long)]
    earnings: PathBuf,

    /// Wage index CSV (Year,Index); the built-in NAWI table is used when omitted
    #[arg(short, long)]
    wage_index: Option<PathBuf>,

    /// Formula parameters JSON; omitted fields keep the standard values
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Extend the record this many years past its last year
    #[arg(long, default_value_t = 0)]
    project_years: u32,

    /// Annual growth applied to projected years
    #[arg(long, default_value_t = 0.0)]
    growth_rate: f64,

    /// Print the year-by-year indexing table
    #[arg(long)]
    detail: bool,

    /// Print JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut record = load_earnings(&cli.earnings)
        .with_context(|| format!("loading earnings from {}", cli.earnings.display()))?;
    log::info!("Loaded {} years of earnings from {}", record.len(), cli.earnings.display());

    if cli.project_years > 0 {
        record = project_earnings(&record, cli.project_years, cli.growth_rate);
        log::info!(
            "Projected {} future years at {:.2}% growth",
            cli.project_years,
            cli.growth_rate * 100.0
        );
    }

    let wage_index = match &cli.wage_index {
        Some(path) => load_wage_index(path)
            .with_context(|| format!("loading wage index from {}", path.display()))?,
        None => {
            log::info!("No wage index file given, using built-in NAWI 1951-2022");
            WageIndexSeries::nawi()
        }
    };

    let params = match &cli.params {
        Some(path) => FormulaParameters::from_json_path(path)
            .with_context(|| format!("loading formula parameters from {}", path.display()))?,
        None => FormulaParameters::default(),
    };

    let calculator = BenefitCalculator::new(wage_index, params);
    let detail = calculator
        .calculate_detailed(&record)
        .context("benefit calculation failed")?;

    if cli.json {
        if cli.detail {
            println!("{}", serde_json::to_string_pretty(&detail)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&detail.result)?);
        }
        return Ok(());
    }

    if cli.detail {
        println!("{}", detail.year_table(&record));
    }
    print!("{}", detail.result.report());

    Ok(())
}
