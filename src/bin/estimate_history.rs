//! Estimate a full earnings history from a single recent wage
//!
//! Writes the estimated record as CSV (Year,Earnings) to a file or stdout and
//! optionally runs the benefit calculation on it.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;

use benefit_estimator::earnings::{estimate_earnings, EstimateRequest};
use benefit_estimator::wage_index::load_wage_index;
use benefit_estimator::{BenefitCalculator, EarningsRecord, FormulaParameters, WageIndexSeries, Year};

#[derive(Parser)]
#[command(name = "estimate_history")]
#[command(about = "Back-estimate an earnings history from age and most recent wage")]
struct Cli {
    /// Current age in years (must be over 22)
    #[arg(long)]
    age: u32,

    /// Wage earned in the last year worked
    #[arg(long)]
    last_wage: f64,

    /// Last year with earnings (defaults to the current year)
    #[arg(long)]
    last_year_worked: Option<Year>,

    /// Individual annual earnings growth on top of wage-index growth
    #[arg(long, default_value_t = 0.0)]
    growth_rate: f64,

    /// Year the estimate is made in (defaults to the system clock)
    #[arg(long)]
    current_year: Option<Year>,

    /// Wage index CSV (Year,Index); the built-in NAWI table is used when omitted
    #[arg(long)]
    wage_index: Option<PathBuf>,

    /// Output CSV path; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also print the benefit estimate for the estimated history
    #[arg(long)]
    calculate: bool,
}

fn write_record<W: io::Write>(writer: W, record: &EarningsRecord) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Year", "Earnings"])?;
    for (year, amount) in record.iter() {
        csv_writer.write_record([year.to_string(), format!("{:.2}", amount)])?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let current_year = cli.current_year.unwrap_or_else(|| chrono::Local::now().year());
    let mut request = EstimateRequest::new(cli.age, cli.last_wage, current_year)
        .with_growth_rate(cli.growth_rate);
    if let Some(year) = cli.last_year_worked {
        request = request.with_last_year_worked(year);
    }

    let wage_index = match &cli.wage_index {
        Some(path) => load_wage_index(path)
            .with_context(|| format!("loading wage index from {}", path.display()))?,
        None => {
            log::info!("No wage index file given, using built-in NAWI 1951-2022");
            WageIndexSeries::nawi()
        }
    };

    let record = estimate_earnings(&request, &wage_index).context("estimating earnings history")?;
    log::info!(
        "Estimated {} years for age {} as of {}",
        record.len(),
        request.age,
        request.current_year
    );

    match &cli.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_record(file, &record)?;
            println!("Estimated history written to: {}", path.display());
        }
        None => write_record(io::stdout().lock(), &record)?,
    }

    if cli.calculate {
        let calculator = BenefitCalculator::new(wage_index, FormulaParameters::default());
        let result = calculator
            .calculate(&record)
            .context("benefit calculation failed")?;
        println!();
        print!("{}", result.report());
    }

    Ok(())
}
