pub mod batch;
pub mod distance;

pub use batch::{QuadkeyPairsToDistances, distances_from};
pub use distance::{TileDistance, tile_distance};
