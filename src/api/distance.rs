use crate::core::distance::{horizontal_distance, vertical_distance};
use crate::core::quadkey::Quadkey;
use serde::{Deserialize, Serialize};

/// Horizontal and vertical tile-grid distance between two quadkeys.
///
/// Both distances count tiles at `level_of_detail`, the shorter of the two
/// input lengths.
///
/// # Example
///
/// ```
/// use quadkey_distance::{Quadkey, TileDistance};
///
/// # fn main() -> Result<(), quadkey_distance::QuadkeyError> {
/// let a = Quadkey::parse("0313")?;
/// let b = Quadkey::parse("12")?;
/// let distance = TileDistance::between(&a, &b);
/// assert_eq!(distance.level_of_detail, 2);
/// assert_eq!((distance.horizontal, distance.vertical), (1, 0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDistance {
    /// Number of tile columns apart
    pub horizontal: u64,
    /// Number of tile rows apart
    pub vertical: u64,
    /// Level of detail both distances are measured at
    pub level_of_detail: u8,
}

impl TileDistance {
    pub fn between(qk1: &Quadkey, qk2: &Quadkey) -> Self {
        Self {
            horizontal: horizontal_distance(qk1, qk2),
            vertical: vertical_distance(qk1, qk2),
            level_of_detail: qk1.level_of_detail().min(qk2.level_of_detail()),
        }
    }

    /// Sum of both axes, i.e. the number of orthogonal tile steps.
    pub fn manhattan(&self) -> u64 {
        self.horizontal + self.vertical
    }

    /// Larger of the two axes, i.e. the number of steps when diagonal moves count as one.
    pub fn chebyshev(&self) -> u64 {
        self.horizontal.max(self.vertical)
    }

    pub fn is_zero(&self) -> bool {
        self.horizontal == 0 && self.vertical == 0
    }
}

/// Shorthand for [`TileDistance::between`].
pub fn tile_distance(qk1: &Quadkey, qk2: &Quadkey) -> TileDistance {
    TileDistance::between(qk1, qk2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::QuadkeyError;

    #[test]
    fn test_between() -> Result<(), QuadkeyError> {
        let a = Quadkey::parse("031313131130102103")?;
        let b = Quadkey::parse("123023130322311221")?;
        let distance = TileDistance::between(&a, &b);

        assert_eq!(distance.horizontal, 40340);
        assert_eq!(distance.vertical, 24925);
        assert_eq!(distance.level_of_detail, 18);
        assert_eq!(distance.manhattan(), 65265);
        assert_eq!(distance.chebyshev(), 40340);
        assert!(!distance.is_zero());
        Ok(())
    }

    #[test]
    fn test_distance_to_matches_between() -> Result<(), QuadkeyError> {
        let a = Quadkey::parse("0")?;
        let b = Quadkey::parse("3120")?;
        assert_eq!(a.distance_to(&b), TileDistance::between(&b, &a));
        assert_eq!(tile_distance(&a, &b), a.distance_to(&b));
        assert_eq!(a.distance_to(&b).level_of_detail, 1);
        Ok(())
    }

    #[test]
    fn test_same_cell_is_zero() -> Result<(), QuadkeyError> {
        let a = Quadkey::parse("2301")?;
        assert!(a.distance_to(&a).is_zero());
        Ok(())
    }

    #[test]
    fn test_serialize_json() -> Result<(), QuadkeyError> {
        let distance = TileDistance::between(&Quadkey::parse("0")?, &Quadkey::parse("3")?);
        let json =
            serde_json::to_string(&distance).map_err(|e| QuadkeyError::IoError(e.to_string()))?;
        assert_eq!(json, r#"{"horizontal":1,"vertical":1,"level_of_detail":1}"#);

        let back: TileDistance =
            serde_json::from_str(&json).map_err(|e| QuadkeyError::IoError(e.to_string()))?;
        assert_eq!(back, distance);
        Ok(())
    }
}
