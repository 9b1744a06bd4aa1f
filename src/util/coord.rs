use crate::core::constants::{
    MAX_LATITUDE, MAX_LEVEL_OF_DETAIL, MAX_LONGITUDE, MIN_LATITUDE, MIN_LEVEL_OF_DETAIL,
    MIN_LONGITUDE, TILE_SIZE,
};
use crate::core::quadkey::Quadkey;
use crate::core::tile::TileXY;
use crate::util::error::QuadkeyError;
use geo_types::Point;
use std::f64::consts::PI;

/// Trait for types that can provide longitude/latitude coordinates.
///
/// Implemented for `(f64, f64)` tuples as `(lon, lat)` and `geo_types::Point<f64>`.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Converts WGS84 longitude/latitude to the Web Mercator tile containing it.
///
/// Latitudes beyond the Mercator limit (about 85.05 degrees) are clipped to it.
pub fn geo_to_tile_xy<C: Coordinate>(
    coord: &C,
    level_of_detail: u8,
) -> Result<TileXY, QuadkeyError> {
    let lon = coord.x();
    let lat = coord.y();

    if !(-90.0..=90.0).contains(&lat) {
        return Err(QuadkeyError::InvalidLatitude(lat));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(QuadkeyError::InvalidLongitude(lon));
    }
    if !(MIN_LEVEL_OF_DETAIL..=MAX_LEVEL_OF_DETAIL).contains(&level_of_detail) {
        return Err(QuadkeyError::InvalidLevelOfDetail(level_of_detail));
    }

    let clipped_lat = lat.clamp(MIN_LATITUDE, MAX_LATITUDE);
    if clipped_lat != lat {
        log::debug!("clipped latitude {} to {}", lat, clipped_lat);
    }

    let x = (lon + 180.0) / 360.0;
    let sin_lat = (clipped_lat * PI / 180.0).sin();
    let y = 0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI);

    let map_size = (TILE_SIZE << level_of_detail) as f64;
    let pixel_x = (x * map_size + 0.5).clamp(0.0, map_size - 1.0) as u64;
    let pixel_y = (y * map_size + 0.5).clamp(0.0, map_size - 1.0) as u64;

    TileXY::new(pixel_x / TILE_SIZE, pixel_y / TILE_SIZE, level_of_detail)
}

/// Converts WGS84 longitude/latitude to the quadkey of the tile containing it.
///
/// # Example
///
/// ```
/// use quadkey_distance::geo_to_quadkey;
///
/// # fn main() -> Result<(), quadkey_distance::QuadkeyError> {
/// // Big Ben, as (lon, lat)
/// let qk = geo_to_quadkey(&(-0.12463100110988065, 51.500752147795716), 18)?;
/// assert_eq!(qk.to_string(), "031313131130102103");
/// # Ok(())
/// # }
/// ```
pub fn geo_to_quadkey<C: Coordinate>(
    coord: &C,
    level_of_detail: u8,
) -> Result<Quadkey, QuadkeyError> {
    Ok(geo_to_tile_xy(coord, level_of_detail)?.to_quadkey())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_ben_and_burj_khalifa() -> Result<(), QuadkeyError> {
        let big_ben = geo_to_quadkey(&(-0.12463100110988065, 51.500752147795716), 22)?;
        let burj_khalifa = geo_to_quadkey(&(55.27452867387456, 25.197258440146513), 22)?;

        assert_eq!(big_ben.level_of_detail(), 22);
        assert!(big_ben.to_string().starts_with("031313131130102103"));
        assert!(burj_khalifa.to_string().starts_with("123023130322311221"));
        Ok(())
    }

    #[test]
    fn test_new_york_city_at_lod_16() -> Result<(), QuadkeyError> {
        let tile = geo_to_tile_xy(&(-74.0060, 40.7128), 16)?;
        assert_eq!((tile.x(), tile.y()), (19295, 24640));
        Ok(())
    }

    #[test]
    fn test_london_at_lod_10() -> Result<(), QuadkeyError> {
        let tile = geo_to_tile_xy(&Point::new(-0.1278, 51.5074), 10)?;
        assert_eq!((tile.x(), tile.y()), (511, 340));
        Ok(())
    }

    #[test]
    fn test_equator_prime_meridian() -> Result<(), QuadkeyError> {
        let qk = geo_to_quadkey(&(0.0, 0.0), 1)?;
        assert_eq!(qk.to_string(), "3");
        Ok(())
    }

    #[test]
    fn test_poles_are_clipped() -> Result<(), QuadkeyError> {
        let north = geo_to_tile_xy(&(0.0, 90.0), 3)?;
        let south = geo_to_tile_xy(&(0.0, -90.0), 3)?;
        assert_eq!(north.y(), 0);
        assert_eq!(south.y(), 7);
        Ok(())
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            geo_to_quadkey(&(0.0, 91.0), 10),
            Err(QuadkeyError::InvalidLatitude(_))
        ));
        assert!(matches!(
            geo_to_quadkey(&(-181.0, 0.0), 10),
            Err(QuadkeyError::InvalidLongitude(_))
        ));
        assert!(matches!(
            geo_to_quadkey(&(f64::NAN, 0.0), 10),
            Err(QuadkeyError::InvalidLongitude(_))
        ));
        assert_eq!(
            geo_to_quadkey(&(0.0, 0.0), 0),
            Err(QuadkeyError::InvalidLevelOfDetail(0))
        );
        assert_eq!(
            geo_to_quadkey(&(0.0, 0.0), 24),
            Err(QuadkeyError::InvalidLevelOfDetail(24))
        );
    }

    #[test]
    fn test_tuple_and_point_same_result() -> Result<(), QuadkeyError> {
        let from_tuple = geo_to_quadkey(&(55.2745, 25.1972), 15)?;
        let from_point = geo_to_quadkey(&Point::new(55.2745, 25.1972), 15)?;
        assert_eq!(from_tuple, from_point);
        Ok(())
    }
}
