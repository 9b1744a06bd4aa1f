use crate::api::distance::TileDistance;
use crate::core::quadkey::Quadkey;
use rayon::prelude::*;

/// Trait for computing distances over collections of quadkey pairs.
///
/// Implemented for `[(Quadkey, Quadkey)]` (and so for `Vec` via deref).
/// Results keep the input order.
pub trait QuadkeyPairsToDistances {
    /// Computes the [`TileDistance`] of every pair in parallel.
    fn tile_distances(&self) -> Vec<TileDistance>;
}

impl QuadkeyPairsToDistances for [(Quadkey, Quadkey)] {
    fn tile_distances(&self) -> Vec<TileDistance> {
        self.par_iter()
            .map(|(a, b)| TileDistance::between(a, b))
            .collect()
    }
}

/// Distances from one origin cell to each target, in target order.
///
/// # Example
///
/// ```
/// use quadkey_distance::{Quadkey, distances_from};
///
/// # fn main() -> Result<(), quadkey_distance::QuadkeyError> {
/// let origin = Quadkey::parse("00")?;
/// let targets = vec![Quadkey::parse("01")?, Quadkey::parse("33")?];
/// let distances = distances_from(&origin, &targets);
/// assert_eq!(distances[1].horizontal, 3);
/// # Ok(())
/// # }
/// ```
pub fn distances_from(origin: &Quadkey, targets: &[Quadkey]) -> Vec<TileDistance> {
    targets
        .par_iter()
        .map(|target| TileDistance::between(origin, target))
        .collect()
}
