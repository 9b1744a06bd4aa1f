pub mod csv;

pub use self::csv::{CsvDistanceConfig, CsvToDistances, PairSource, csv_to_distance_csv};
