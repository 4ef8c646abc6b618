//! Load earnings records from CSV (`Year,Earnings`) or JSON (`{"2000": 38915, ...}`)

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::Reader;

use super::EarningsRecord;
use crate::error::LoadError;
use crate::Year;

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: Year,
    #[serde(rename = "Earnings")]
    earnings: f64,
}

/// Load an earnings record, choosing the format from the file extension
/// (`.json` is read as JSON, anything else as CSV)
pub fn load_earnings<P: AsRef<Path>>(path: P) -> Result<EarningsRecord, LoadError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file = File::open(path)?;
    if is_json {
        load_earnings_json_from_reader(BufReader::new(file))
    } else {
        load_earnings_csv_from_reader(file)
    }
}

/// Load earnings from CSV text with a `Year,Earnings` header
pub fn load_earnings_csv_from_reader<R: std::io::Read>(reader: R) -> Result<EarningsRecord, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut earnings = BTreeMap::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        if earnings.insert(row.year, row.earnings).is_some() {
            return Err(LoadError::DuplicateYear(row.year));
        }
    }

    Ok(EarningsRecord::new(earnings))
}

/// Load earnings from a JSON object mapping year strings to amounts
pub fn load_earnings_json_from_reader<R: std::io::Read>(reader: R) -> Result<EarningsRecord, LoadError> {
    let raw: HashMap<String, f64> = serde_json::from_reader(reader)?;
    let mut earnings = BTreeMap::new();

    for (key, amount) in raw {
        let year: Year = key
            .trim()
            .parse()
            .map_err(|_| LoadError::InvalidYear(key.clone()))?;
        if earnings.insert(year, amount).is_some() {
            return Err(LoadError::DuplicateYear(year));
        }
    }

    Ok(EarningsRecord::new(earnings))
}
