use crate::api::distance::TileDistance;
use crate::core::constants::MAX_QUADKEY_LENGTH;
use crate::core::tile::TileXY;
use crate::util::error::QuadkeyError;
use std::fmt;
use std::str::FromStr;

/// Column bit of a quadkey digit: 0 for the left half, 1 for the right half.
#[inline]
pub(crate) fn column_bit(digit: u8) -> u8 {
    digit & 1
}

/// Row bit of a quadkey digit: 0 for the top half, 1 for the bottom half.
#[inline]
pub(crate) fn row_bit(digit: u8) -> u8 {
    digit >> 1
}

/// A quadtree tile address.
///
/// Holds one digit (0-3) per subdivision level, coarsest first. The number of
/// digits is the level of detail; the empty quadkey is the root cell.
///
/// # Example
///
/// ```
/// use quadkey_distance::Quadkey;
///
/// # fn main() -> Result<(), quadkey_distance::QuadkeyError> {
/// let qk: Quadkey = "0313".parse()?;
/// assert_eq!(qk.level_of_detail(), 4);
/// assert_eq!(qk.parent().map(|p| p.to_string()), Some("031".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quadkey {
    digits: Vec<u8>,
}

impl Quadkey {
    pub(crate) fn from_digits_unchecked(digits: Vec<u8>) -> Self {
        Self { digits }
    }

    /// The root cell (level of detail 0).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a string of '0'..='3' characters.
    pub fn parse(s: &str) -> Result<Self, QuadkeyError> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, found)| match found {
                '0'..='3' => Ok(found as u8 - b'0'),
                _ => Err(QuadkeyError::InvalidDigit { position, found }),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        if digits.len() > MAX_QUADKEY_LENGTH {
            return Err(QuadkeyError::QuadkeyTooLong(digits.len()));
        }
        Ok(Self { digits })
    }

    /// Builds a quadkey from numeric digit values (each 0-3).
    pub fn from_digits(digits: &[u8]) -> Result<Self, QuadkeyError> {
        if let Some(position) = digits.iter().position(|&d| d > 3) {
            let found = char::from_digit(u32::from(digits[position]), 36)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(QuadkeyError::InvalidDigit { position, found });
        }
        if digits.len() > MAX_QUADKEY_LENGTH {
            return Err(QuadkeyError::QuadkeyTooLong(digits.len()));
        }
        Ok(Self {
            digits: digits.to_vec(),
        })
    }

    /// Number of digits, i.e. the zoom level this quadkey addresses.
    pub fn level_of_detail(&self) -> u8 {
        self.digits.len() as u8
    }

    pub fn is_root(&self) -> bool {
        self.digits.is_empty()
    }

    /// Numeric digit values, coarsest first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the ancestor at `level_of_detail`, or a copy of `self` when it
    /// is already at or above that level.
    pub fn truncated(&self, level_of_detail: u8) -> Self {
        let len = self.digits.len().min(level_of_detail as usize);
        Self {
            digits: self.digits[..len].to_vec(),
        }
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, prefix) = self.digits.split_last()?;
        Some(Self {
            digits: prefix.to_vec(),
        })
    }

    /// Returns the child cell in quadrant `digit`.
    pub fn child(&self, digit: u8) -> Result<Self, QuadkeyError> {
        let mut digits = self.digits.clone();
        digits.push(digit);
        Self::from_digits(&digits)
    }

    /// True when `other` lies inside this cell. A cell counts as its own
    /// ancestor, and the root is an ancestor of every cell.
    pub fn is_ancestor_of(&self, other: &Quadkey) -> bool {
        other.digits.starts_with(&self.digits)
    }

    /// Decodes the quadkey into its tile address.
    pub fn to_tile_xy(&self) -> TileXY {
        let (x, y) = self.digits.iter().fold((0u64, 0u64), |(x, y), &d| {
            (
                (x << 1) | u64::from(column_bit(d)),
                (y << 1) | u64::from(row_bit(d)),
            )
        });
        TileXY::from_parts(x, y, self.level_of_detail())
    }

    /// Tile-grid distance to `other`, measured at the shorter of the two
    /// levels of detail.
    pub fn distance_to(&self, other: &Quadkey) -> TileDistance {
        TileDistance::between(self, other)
    }
}

impl fmt::Display for Quadkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", char::from(b'0' + d))?;
        }
        Ok(())
    }
}

impl FromStr for Quadkey {
    type Err = QuadkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quadkey::parse(s)
    }
}

impl TryFrom<&str> for Quadkey {
    type Error = QuadkeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Quadkey::parse(value)
    }
}
