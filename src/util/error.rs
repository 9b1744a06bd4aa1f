/// Error type for quadkey-distance operations.
#[derive(Debug, PartialEq)]
pub enum QuadkeyError {
    /// A quadkey character is not one of '0', '1', '2' or '3'.
    InvalidDigit { position: usize, found: char },
    /// The quadkey has more digits than `MAX_QUADKEY_LENGTH`.
    QuadkeyTooLong(usize),
    /// Tile x/y does not fit the grid at the given level of detail.
    InvalidTile { x: u64, y: u64, level_of_detail: u8 },
    /// Latitude is outside -90.0..=90.0 (or not a number).
    InvalidLatitude(f64),
    /// Longitude is outside -180.0..=180.0 (or not a number).
    InvalidLongitude(f64),
    /// The level of detail is outside the supported range (1-23).
    InvalidLevelOfDetail(u8),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
}

impl std::fmt::Display for QuadkeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadkeyError::InvalidDigit { position, found } => {
                write!(f, "Invalid quadkey digit '{}' at position {}", found, position)
            }
            QuadkeyError::QuadkeyTooLong(len) => write!(f, "Quadkey too long: {} digits", len),
            QuadkeyError::InvalidTile {
                x,
                y,
                level_of_detail,
            } => write!(
                f,
                "Invalid tile ({}, {}) at level of detail {}",
                x, y, level_of_detail
            ),
            QuadkeyError::InvalidLatitude(lat) => write!(f, "Invalid latitude: {}", lat),
            QuadkeyError::InvalidLongitude(lon) => write!(f, "Invalid longitude: {}", lon),
            QuadkeyError::InvalidLevelOfDetail(lod) => {
                write!(f, "Invalid level of detail: {}", lod)
            }
            QuadkeyError::IoError(msg) => write!(f, "IO error: {}", msg),
            QuadkeyError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for QuadkeyError {}
