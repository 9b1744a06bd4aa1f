pub mod constants;
pub mod distance;
pub mod quadkey;
pub mod tile;

pub use constants::{
    MAX_LATITUDE, MAX_LEVEL_OF_DETAIL, MAX_LONGITUDE, MAX_QUADKEY_LENGTH, MIN_LATITUDE,
    MIN_LEVEL_OF_DETAIL, MIN_LONGITUDE, TILE_SIZE,
};
pub use distance::{
    horizontal_distance, horizontal_offset, try_horizontal_distance, try_vertical_distance,
    vertical_distance, vertical_offset,
};
pub use quadkey::Quadkey;
pub use tile::TileXY;
