use crate::core::constants::MAX_QUADKEY_LENGTH;
use crate::core::quadkey::Quadkey;
use crate::util::error::QuadkeyError;

/// Tile address in the quadtree grid.
///
/// `x` grows eastwards and `y` southwards; both lie in `0..2^level_of_detail`.
/// Fields are private so every value goes through [`TileXY::new`] or a decoded
/// quadkey, keeping `level_of_detail` within `MAX_QUADKEY_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileXY {
    x: u64,
    y: u64,
    level_of_detail: u8,
}

impl TileXY {
    pub fn new(x: u64, y: u64, level_of_detail: u8) -> Result<Self, QuadkeyError> {
        let invalid = QuadkeyError::InvalidTile {
            x,
            y,
            level_of_detail,
        };
        if level_of_detail as usize > MAX_QUADKEY_LENGTH {
            return Err(invalid);
        }
        let size = 1u64 << level_of_detail;
        if x >= size || y >= size {
            return Err(invalid);
        }
        Ok(Self::from_parts(x, y, level_of_detail))
    }

    // Caller guarantees level_of_detail <= MAX_QUADKEY_LENGTH and x, y < 2^level_of_detail.
    pub(crate) fn from_parts(x: u64, y: u64, level_of_detail: u8) -> Self {
        Self {
            x,
            y,
            level_of_detail,
        }
    }

    /// Column index, 0 at the west edge
    pub fn x(&self) -> u64 {
        self.x
    }

    /// Row index, 0 at the north edge
    pub fn y(&self) -> u64 {
        self.y
    }

    pub fn level_of_detail(&self) -> u8 {
        self.level_of_detail
    }

    /// Encodes the tile address as a quadkey, interleaving the x and y bits.
    pub fn to_quadkey(&self) -> Quadkey {
        let digits = (1..=self.level_of_detail)
            .rev()
            .map(|i| {
                let mask = 1u64 << (i - 1);
                let mut digit = 0u8;
                if self.x & mask != 0 {
                    digit += 1;
                }
                if self.y & mask != 0 {
                    digit += 2;
                }
                digit
            })
            .collect();
        Quadkey::from_digits_unchecked(digits)
    }
}
