use std::fs::File;
use std::io::BufReader;

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    JsonParse(#[from] serde_json::Error),
}

/// A date range as it arrives from the input file; either bound may be absent
/// and validation is left to the calculator.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DateRangeInput {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl DateRangeInput {
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    ranges: Vec<DateRangeInput>,
}

pub struct Configuration {
    ranges: Vec<DateRangeInput>,
}

impl Configuration {
    pub fn from_reader(file_path: &str) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Ok(Configuration { ranges: json_prop.ranges })
    }

    pub fn ranges(&self) -> &[DateRangeInput] {
        &self.ranges
    }
}
