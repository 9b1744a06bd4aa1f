use crate::api::distance::TileDistance;
use crate::core::quadkey::Quadkey;
use crate::util::coord::geo_to_quadkey;
use crate::util::error::QuadkeyError;
use csv::{Reader, StringRecord, Writer};
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

enum SourceIndices {
    Quadkeys {
        first: usize,
        second: usize,
    },
    Coordinates {
        first: (usize, usize),
        second: (usize, usize),
        level_of_detail: u8,
    },
}

#[derive(Debug, Clone)]
pub enum PairSource {
    /// Two columns that already hold quadkeys
    QuadkeyColumns { first: String, second: String },
    /// Longitude/latitude columns for both locations, converted at `level_of_detail`
    CoordinateColumns {
        first_lon: String,
        first_lat: String,
        second_lon: String,
        second_lat: String,
        level_of_detail: u8,
    },
}

#[derive(Debug, Clone)]
pub struct CsvDistanceConfig {
    pub source: PairSource,
    pub exclude_columns: Vec<String>,
    pub skip_invalid: bool,
}

impl CsvDistanceConfig {
    /// Create config for a CSV with two quadkey columns.
    ///
    /// # Example
    /// ```
    /// use quadkey_distance::CsvDistanceConfig;
    ///
    /// let config = CsvDistanceConfig::new("origin_qk", "destination_qk");
    /// ```
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            source: PairSource::QuadkeyColumns {
                first: first.into(),
                second: second.into(),
            },
            exclude_columns: Vec::new(),
            skip_invalid: false,
        }
    }

    /// Create config for a CSV with longitude/latitude columns for both locations.
    ///
    /// # Example
    /// ```
    /// use quadkey_distance::CsvDistanceConfig;
    ///
    /// let config = CsvDistanceConfig::from_coords("lon_a", "lat_a", "lon_b", "lat_b", 18);
    /// ```
    pub fn from_coords(
        first_lon: impl Into<String>,
        first_lat: impl Into<String>,
        second_lon: impl Into<String>,
        second_lat: impl Into<String>,
        level_of_detail: u8,
    ) -> Self {
        Self {
            source: PairSource::CoordinateColumns {
                first_lon: first_lon.into(),
                first_lat: first_lat.into(),
                second_lon: second_lon.into(),
                second_lat: second_lat.into(),
                level_of_detail,
            },
            exclude_columns: Vec::new(),
            skip_invalid: false,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    // Skip rows that fail to parse instead of aborting the run.
    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

pub trait CsvToDistances {
    fn to_distance_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvDistanceConfig,
    ) -> Result<usize, QuadkeyError>;
}

impl<P: AsRef<Path>> CsvToDistances for P {
    fn to_distance_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvDistanceConfig,
    ) -> Result<usize, QuadkeyError> {
        csv_to_distance_csv(self, output_path, config)
    }
}

fn column_index(headers: &StringRecord, name: &str, label: &str) -> Result<usize, QuadkeyError> {
    if name.is_empty() {
        return Err(QuadkeyError::CsvError(format!(
            "{} column name cannot be empty",
            label
        )));
    }
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| QuadkeyError::CsvError(format!("{} column '{}' not found", label, name)))
}

fn field<'r>(record: &'r StringRecord, idx: usize) -> Result<&'r str, QuadkeyError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| QuadkeyError::CsvError(format!("Missing column at index {}", idx)))
}

fn coordinate(
    record: &StringRecord,
    (lon_idx, lat_idx): (usize, usize),
) -> Result<(f64, f64), QuadkeyError> {
    let lon_str = field(record, lon_idx)?;
    let lat_str = field(record, lat_idx)?;
    let lon: f64 = lon_str
        .parse()
        .map_err(|_| QuadkeyError::CsvError(format!("Invalid longitude: '{}'", lon_str)))?;
    let lat: f64 = lat_str
        .parse()
        .map_err(|_| QuadkeyError::CsvError(format!("Invalid latitude: '{}'", lat_str)))?;
    Ok((lon, lat))
}

fn pair_from_record(
    record: &StringRecord,
    indices: &SourceIndices,
) -> Result<(Quadkey, Quadkey), QuadkeyError> {
    match indices {
        SourceIndices::Quadkeys { first, second } => Ok((
            Quadkey::parse(field(record, *first)?)?,
            Quadkey::parse(field(record, *second)?)?,
        )),
        SourceIndices::Coordinates {
            first,
            second,
            level_of_detail,
        } => Ok((
            geo_to_quadkey(&coordinate(record, *first)?, *level_of_detail)?,
            geo_to_quadkey(&coordinate(record, *second)?, *level_of_detail)?,
        )),
    }
}

fn write_row(
    writer: &mut Writer<File>,
    distance: &TileDistance,
    record: &StringRecord,
    exclude_indices: &HashSet<usize>,
) -> Result<(), QuadkeyError> {
    let mut row: Vec<String> = vec![
        distance.horizontal.to_string(),
        distance.vertical.to_string(),
        distance.level_of_detail.to_string(),
    ];
    for (i, value) in record.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            row.push(value.to_string());
        }
    }
    writer
        .write_record(&row)
        .map_err(|e| QuadkeyError::CsvError(e.to_string()))
}

/// Reads pairs of locations from a CSV file and writes a CSV with their tile distances.
///
/// Output columns are `horizontal_distance`, `vertical_distance` and
/// `level_of_detail`, followed by every input column not listed in
/// `exclude_columns`. Rows are streamed one at a time. Returns the number of
/// rows written.
///
/// The output file is only replaced once every row has been processed, so a
/// failed run leaves any earlier output untouched.
///
/// # Example
///
/// ```no_run
/// use quadkey_distance::{csv_to_distance_csv, CsvDistanceConfig};
///
/// let config = CsvDistanceConfig::new("origin_qk", "destination_qk")
///     .exclude(vec!["notes".into()])
///     .skip_invalid(true);
///
/// csv_to_distance_csv("pairs.csv", "distances.csv", &config).unwrap();
/// ```
pub fn csv_to_distance_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvDistanceConfig,
) -> Result<usize, QuadkeyError> {
    let csv_path = csv_path.as_ref();
    let file = File::open(csv_path).map_err(|e| QuadkeyError::IoError(e.to_string()))?;
    let mut reader = Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| QuadkeyError::CsvError(e.to_string()))?
        .clone();

    let indices = match &config.source {
        PairSource::QuadkeyColumns { first, second } => SourceIndices::Quadkeys {
            first: column_index(&headers, first, "First quadkey")?,
            second: column_index(&headers, second, "Second quadkey")?,
        },
        PairSource::CoordinateColumns {
            first_lon,
            first_lat,
            second_lon,
            second_lat,
            level_of_detail,
        } => SourceIndices::Coordinates {
            first: (
                column_index(&headers, first_lon, "First longitude")?,
                column_index(&headers, first_lat, "First latitude")?,
            ),
            second: (
                column_index(&headers, second_lon, "Second longitude")?,
                column_index(&headers, second_lat, "Second latitude")?,
            ),
            level_of_detail: *level_of_detail,
        },
    };

    let exclude_indices: HashSet<usize> = config
        .exclude_columns
        .iter()
        .filter_map(|name| headers.iter().position(|h| h == name))
        .collect();

    let output_path = output_path.as_ref();
    let mut partial = output_path.as_os_str().to_owned();
    partial.push(".partial");
    let partial_path = PathBuf::from(partial);

    log::info!("computing tile distances for {}", csv_path.display());

    // Rows go to a sibling file that only replaces the output once every row succeeded
    match write_distances(
        &mut reader,
        &headers,
        &indices,
        &exclude_indices,
        config,
        &partial_path,
    ) {
        Ok((written, skipped)) => {
            std::fs::rename(&partial_path, output_path)
                .map_err(|e| QuadkeyError::IoError(e.to_string()))?;
            log::info!("wrote {} rows, skipped {}", written, skipped);
            Ok(written)
        }
        Err(e) => {
            if let Err(remove_err) = std::fs::remove_file(&partial_path) {
                log::debug!(
                    "could not remove {}: {}",
                    partial_path.display(),
                    remove_err
                );
            }
            Err(e)
        }
    }
}

/// Line number a record starts on, counting the header as line 1.
fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn write_distances(
    reader: &mut Reader<File>,
    headers: &StringRecord,
    indices: &SourceIndices,
    exclude_indices: &HashSet<usize>,
    config: &CsvDistanceConfig,
    path: &Path,
) -> Result<(usize, usize), QuadkeyError> {
    let out_file = File::create(path).map_err(|e| QuadkeyError::IoError(e.to_string()))?;
    let mut writer = Writer::from_writer(out_file);

    let mut header_row: Vec<&str> =
        vec!["horizontal_distance", "vertical_distance", "level_of_detail"];
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| QuadkeyError::CsvError(e.to_string()))?;

    let mut written = 0;
    let mut skipped = 0;
    for result in reader.records() {
        let record = result.map_err(|e| QuadkeyError::CsvError(e.to_string()))?;

        let (first, second) = match pair_from_record(&record, indices) {
            Ok(pair) => pair,
            Err(e) if config.skip_invalid => {
                log::warn!("skipping row at line {}: {}", record_line(&record), e);
                skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let distance = TileDistance::between(&first, &second);
        write_row(&mut writer, &distance, &record, exclude_indices)?;
        written += 1;
    }

    writer
        .flush()
        .map_err(|e| QuadkeyError::IoError(e.to_string()))?;
    Ok((written, skipped))
}
