//! Property-based tests for quadkey distances.

use proptest::prelude::*;
use quadkey_distance::{
    Quadkey, QuadkeyPairsToDistances, TileDistance, horizontal_distance, horizontal_offset,
    vertical_distance, vertical_offset,
};

fn arbitrary_quadkey(max_len: usize) -> impl Strategy<Value = Quadkey> {
    prop::collection::vec(0u8..4, 0..=max_len)
        .prop_map(|digits| Quadkey::from_digits(&digits).expect("digits are in range"))
}

/// Distance by decoding both quadkeys at the shared level and subtracting.
fn decoded_distance(a: &Quadkey, b: &Quadkey) -> (u64, u64) {
    let lod = a.level_of_detail().min(b.level_of_detail());
    let ta = a.truncated(lod).to_tile_xy();
    let tb = b.truncated(lod).to_tile_xy();
    (ta.x().abs_diff(tb.x()), ta.y().abs_diff(tb.y()))
}

proptest! {
    #[test]
    fn identity(q in arbitrary_quadkey(30)) {
        prop_assert_eq!(horizontal_distance(&q, &q), 0);
        prop_assert_eq!(vertical_distance(&q, &q), 0);
    }

    #[test]
    fn symmetry(a in arbitrary_quadkey(30), b in arbitrary_quadkey(30)) {
        prop_assert_eq!(horizontal_distance(&a, &b), horizontal_distance(&b, &a));
        prop_assert_eq!(vertical_distance(&a, &b), vertical_distance(&b, &a));
        prop_assert_eq!(horizontal_offset(&a, &b), -horizontal_offset(&b, &a));
        prop_assert_eq!(vertical_offset(&a, &b), -vertical_offset(&b, &a));
    }

    #[test]
    fn truncation_invariance(
        a in arbitrary_quadkey(24),
        b in arbitrary_quadkey(24),
        suffix in prop::collection::vec(0u8..4, 0..=24)
    ) {
        let (longer, shorter) = if a.level_of_detail() >= b.level_of_detail() {
            (a, b)
        } else {
            (b, a)
        };
        let mut extended = longer.digits().to_vec();
        extended.extend_from_slice(&suffix);
        let extended = Quadkey::from_digits(&extended).expect("within length limit");

        prop_assert_eq!(
            horizontal_distance(&longer, &shorter),
            horizontal_distance(&extended, &shorter)
        );
        prop_assert_eq!(
            vertical_distance(&longer, &shorter),
            vertical_distance(&extended, &shorter)
        );
    }

    #[test]
    fn root_is_always_zero(q in arbitrary_quadkey(30)) {
        let root = Quadkey::root();
        prop_assert!(TileDistance::between(&root, &q).is_zero());
        prop_assert!(TileDistance::between(&q, &root).is_zero());
    }

    #[test]
    fn matches_decoded_tile_difference(a in arbitrary_quadkey(40), b in arbitrary_quadkey(40)) {
        let (dx, dy) = decoded_distance(&a, &b);
        prop_assert_eq!(horizontal_distance(&a, &b), dx);
        prop_assert_eq!(vertical_distance(&a, &b), dy);
    }

    #[test]
    fn bounded_by_grid_size(a in arbitrary_quadkey(40), b in arbitrary_quadkey(40)) {
        let distance = TileDistance::between(&a, &b);
        let size = 1u64 << distance.level_of_detail;
        prop_assert!(distance.horizontal < size);
        prop_assert!(distance.vertical < size);
    }

    #[test]
    fn batch_matches_pairwise(
        pairs in prop::collection::vec((arbitrary_quadkey(20), arbitrary_quadkey(20)), 0..50)
    ) {
        let batch = pairs.tile_distances();
        prop_assert_eq!(batch.len(), pairs.len());
        for ((a, b), distance) in pairs.iter().zip(&batch) {
            prop_assert_eq!(*distance, TileDistance::between(a, b));
        }
    }
}

#[test]
fn single_digit_table() {
    let cases = [
        ("0", "1", 1, 0),
        ("0", "2", 0, 1),
        ("0", "3", 1, 1),
        ("1", "2", 1, 1),
        ("00", "01", 1, 0),
    ];
    for (a, b, h, v) in cases {
        let a = Quadkey::parse(a).unwrap();
        let b = Quadkey::parse(b).unwrap();
        assert_eq!(horizontal_distance(&a, &b), h, "horizontal {} {}", a, b);
        assert_eq!(vertical_distance(&a, &b), v, "vertical {} {}", a, b);
    }
}
