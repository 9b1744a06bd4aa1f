pub mod coord;
pub mod error;

pub use coord::{Coordinate, geo_to_quadkey, geo_to_tile_xy};
pub use error::QuadkeyError;
