use std::io::Write;

use weekspan::configuration::{Configuration, ConfigurationError};
use weekspan::time::weekspan::{WeekSpanError, weeks_between};

#[test]
fn ranges_json_roundtrip() {
    let input = r#"{
  "ranges": [
    {"start_date": "2018-07-09", "end_date": "2018-07-16"},
    {"start_date": null, "end_date": "2018-07-16"},
    {"start_date": "2018-07-11"}
  ]
}"#;
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(input.as_bytes()).expect("write json");
    let config = Configuration::from_reader(file.path().to_str().expect("utf-8 path"))
        .expect("read configuration");
    assert_eq!(config.ranges().len(), 3);

    let results: Vec<_> = config
        .ranges()
        .iter()
        .map(|range| weeks_between(range.start_date(), range.end_date()))
        .collect();
    let span = results[0].expect("valid range");
    assert_eq!(span.weeks(), 1);
    assert_eq!(span.extra_days(), 0);
    assert_eq!(results[1], Err(WeekSpanError::MissingStartDate));
    assert_eq!(results[2], Err(WeekSpanError::MissingEndDate));
}

#[test]
fn missing_file_reports_io_error() {
    let result = Configuration::from_reader("no/such/ranges.json");
    assert!(matches!(result, Err(ConfigurationError::Io(_))));
}

#[test]
fn malformed_json_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{\"ranges\": [").expect("write json");
    let result = Configuration::from_reader(file.path().to_str().expect("utf-8 path"));
    assert!(matches!(result, Err(ConfigurationError::JsonParse(_))));
}
