use weekspan::configuration::Configuration;
use weekspan::time::weekspan::weeks_between;

const JSON_PATH: &str = "json/ranges.json";

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| JSON_PATH.to_owned());
    let config = Configuration::from_reader(&path).unwrap();
    for range in config.ranges() {
        match weeks_between(range.start_date(), range.end_date()) {
            Ok(span) => println!("{}", span),
            Err(error) => println!("{}", error),
        }
    }
}
