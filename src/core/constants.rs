/// Longest quadkey accepted by [`Quadkey`](crate::Quadkey).
///
/// Keeps every signed offset below 2^62 so it fits an `i64`.
pub const MAX_QUADKEY_LENGTH: usize = 62;

/// Minimum level of detail for geographic conversion
pub const MIN_LEVEL_OF_DETAIL: u8 = 1;

/// Maximum level of detail for geographic conversion
pub const MAX_LEVEL_OF_DETAIL: u8 = 23;

/// Web Mercator latitude limits, in degrees
pub const MIN_LATITUDE: f64 = -85.05112878;
pub const MAX_LATITUDE: f64 = 85.05112878;

/// Longitude limits, in degrees
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Edge length of a map tile in pixels
pub const TILE_SIZE: u64 = 256;
