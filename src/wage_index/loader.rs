//! Load a wage index series from CSV (`Year,Index`)

use std::collections::BTreeMap;
use std::path::Path;

use csv::Reader;

use super::WageIndexSeries;
use crate::error::LoadError;
use crate::Year;

/// Default location of the wage index table
pub const DEFAULT_WAGE_INDEX_PATH: &str = "data/wage_index.csv";

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: Year,
    #[serde(rename = "Index")]
    index: f64,
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<WageIndexSeries, LoadError> {
    let mut values = BTreeMap::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        if values.insert(row.year, row.index).is_some() {
            return Err(LoadError::DuplicateYear(row.year));
        }
    }

    let series = WageIndexSeries::new(values);
    series.validate()?;
    Ok(series)
}

/// Load a wage index series from a CSV file
pub fn load_wage_index<P: AsRef<Path>>(path: P) -> Result<WageIndexSeries, LoadError> {
    collect_rows(Reader::from_path(path)?)
}

/// Load a wage index series from any reader
pub fn load_wage_index_from_reader<R: std::io::Read>(reader: R) -> Result<WageIndexSeries, LoadError> {
    collect_rows(Reader::from_reader(reader))
}

/// Load the wage index from the default data/wage_index.csv location
pub fn load_default_wage_index() -> Result<WageIndexSeries, LoadError> {
    load_wage_index(DEFAULT_WAGE_INDEX_PATH)
}
