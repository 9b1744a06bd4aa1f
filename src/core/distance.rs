use crate::core::quadkey::{Quadkey, column_bit, row_bit};
use crate::util::error::QuadkeyError;

/// Signed offset along one axis.
///
/// Both quadkeys are cut to the shorter length, then walked from the finest
/// digit back to the coarsest so that position `i` weighs `2^i` tiles. Where
/// the axis bits differ, the offset moves by `2^i` towards whichever side
/// `qk2` lies on.
fn axis_offset(qk1: &Quadkey, qk2: &Quadkey, axis_bit: fn(u8) -> u8) -> i64 {
    let min_len = qk1.digits().len().min(qk2.digits().len());
    let first = &qk1.digits()[..min_len];
    let second = &qk2.digits()[..min_len];

    first
        .iter()
        .rev()
        .zip(second.iter().rev())
        .enumerate()
        .fold(0i64, |distance, (i, (&d1, &d2))| {
            match (axis_bit(d1), axis_bit(d2)) {
                (0, 1) => distance + (1i64 << i),
                (1, 0) => distance - (1i64 << i),
                _ => distance,
            }
        })
}

/// Signed column offset from `qk1` to `qk2`; positive when `qk2` lies east.
///
/// Measured in tiles at the shorter of the two levels of detail.
pub fn horizontal_offset(qk1: &Quadkey, qk2: &Quadkey) -> i64 {
    axis_offset(qk1, qk2, column_bit)
}

/// Signed row offset from `qk1` to `qk2`; positive when `qk2` lies south.
///
/// Measured in tiles at the shorter of the two levels of detail.
pub fn vertical_offset(qk1: &Quadkey, qk2: &Quadkey) -> i64 {
    axis_offset(qk1, qk2, row_bit)
}

/// Number of tile columns between two quadkeys.
///
/// The longer quadkey is truncated to the length of the shorter one, so the
/// result counts tiles at that coarser level of detail. Results computed at
/// different truncation lengths are not comparable with each other.
///
/// # Example
///
/// ```
/// use quadkey_distance::{Quadkey, horizontal_distance};
///
/// # fn main() -> Result<(), quadkey_distance::QuadkeyError> {
/// let a = Quadkey::parse("00")?;
/// let b = Quadkey::parse("01")?;
/// assert_eq!(horizontal_distance(&a, &b), 1);
/// # Ok(())
/// # }
/// ```
pub fn horizontal_distance(qk1: &Quadkey, qk2: &Quadkey) -> u64 {
    horizontal_offset(qk1, qk2).unsigned_abs()
}

/// Number of tile rows between two quadkeys.
///
/// Truncates like [`horizontal_distance`]; the unit is tiles at the shorter
/// level of detail.
pub fn vertical_distance(qk1: &Quadkey, qk2: &Quadkey) -> u64 {
    vertical_offset(qk1, qk2).unsigned_abs()
}

/// Parses both strings and returns [`horizontal_distance`].
///
/// Fails with [`QuadkeyError::InvalidDigit`] on the first character outside
/// '0'..='3'.
pub fn try_horizontal_distance(qk1: &str, qk2: &str) -> Result<u64, QuadkeyError> {
    let qk1 = Quadkey::parse(qk1)?;
    let qk2 = Quadkey::parse(qk2)?;
    Ok(horizontal_distance(&qk1, &qk2))
}

/// Parses both strings and returns [`vertical_distance`].
pub fn try_vertical_distance(qk1: &str, qk2: &str) -> Result<u64, QuadkeyError> {
    let qk1 = Quadkey::parse(qk1)?;
    let qk2 = Quadkey::parse(qk2)?;
    Ok(vertical_distance(&qk1, &qk2))
}
