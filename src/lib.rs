//! # quadkey-distance
//!
//! Tile-grid distance between quadkeys, computed straight from their digits.
//! Distances are counted in tiles at the shorter of the two levels of detail.
//!
//! There are currently three main entry points.
//!
//! ### 1. `horizontal_distance` / `vertical_distance` - Single Pairs
//!
//! ```
//! use quadkey_distance::{Quadkey, horizontal_distance, vertical_distance};
//!
//! # fn main() -> Result<(), quadkey_distance::QuadkeyError> {
//! let big_ben: Quadkey = "031313131130102103".parse()?;
//! let burj_khalifa: Quadkey = "123023130322311221".parse()?;
//!
//! assert_eq!(horizontal_distance(&big_ben, &burj_khalifa), 40340);
//! assert_eq!(vertical_distance(&big_ben, &burj_khalifa), 24925);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `geo_to_quadkey` - From Longitude/Latitude
//!
//! ```
//! use quadkey_distance::{TileDistance, geo_to_quadkey};
//!
//! # fn main() -> Result<(), quadkey_distance::QuadkeyError> {
//! let a = geo_to_quadkey(&(-0.1246, 51.5007), 12)?;
//! let b = geo_to_quadkey(&(-0.0754, 51.5055), 12)?;
//! let distance = TileDistance::between(&a, &b);
//! println!("{} x {} tiles", distance.horizontal, distance.vertical);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToDistances` - CSV File Conversion
//!
//! ```no_run
//! use quadkey_distance::{CsvDistanceConfig, CsvToDistances};
//!
//! let config = CsvDistanceConfig::from_coords("lon_a", "lat_a", "lon_b", "lat_b", 18)
//!     .skip_invalid(true);
//!
//! "journeys.csv".to_distance_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod io;
pub mod util;

pub use crate::api::{QuadkeyPairsToDistances, TileDistance, distances_from, tile_distance};
pub use crate::core::{
    MAX_LATITUDE, MAX_LEVEL_OF_DETAIL, MAX_LONGITUDE, MAX_QUADKEY_LENGTH, MIN_LATITUDE,
    MIN_LEVEL_OF_DETAIL, MIN_LONGITUDE, Quadkey, TILE_SIZE, TileXY, horizontal_distance,
    horizontal_offset, try_horizontal_distance, try_vertical_distance, vertical_distance,
    vertical_offset,
};
pub use crate::io::{CsvDistanceConfig, CsvToDistances, PairSource, csv_to_distance_csv};
pub use crate::util::{Coordinate, QuadkeyError, geo_to_quadkey, geo_to_tile_xy};

pub use geo_types;
