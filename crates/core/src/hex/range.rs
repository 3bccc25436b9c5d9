use crate::{
    util::{field::Integer, hex_range_len},
    Hex,
};
use anyhow::bail;
use fnv::FnvBuildHasher;
use log::trace;
use std::{cmp, collections::HashSet};

/// A set of hexes
pub type HexSet<I> = HashSet<Hex<I>, FnvBuildHasher>;

/// Calculate the set of all hexes within `radius` steps of `center`
/// (inclusive), i.e. every hex `h` where `hex_norm(h - center) <= radius`.
/// The hexes form a larger hexagon around `center`, and there are always
/// exactly `3r² + 3r + 1` of them.
///
/// Returns an error if `radius` is negative.
pub fn hex_range<I: Integer>(
    center: Hex<I>,
    radius: I,
) -> anyhow::Result<HexSet<I>> {
    if radius < I::ZERO {
        bail!("Invalid radius {}; must be non-negative", radius);
    }

    let capacity = hex_range_len(radius.into_f64() as usize);
    let mut hexes =
        HexSet::with_capacity_and_hasher(capacity, FnvBuildHasher::default());

    let mut q = -radius;
    while q <= radius {
        // If we just do [-r,r] for r as well, then we end up with a diamond
        // pattern instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let r_min = cmp::max(-radius, -q - radius);
        let r_max = cmp::min(radius, -q + radius);
        let mut r = r_min;
        while r <= r_max {
            hexes.insert(center + Hex::new_unchecked(q, r));
            r = r + I::ONE;
        }
        q = q + I::ONE;
    }
    debug_assert_eq!(hexes.len(), capacity, "expected 3r²+3r+1 hexes");
    trace!(
        "Enumerated {} hexes within {} of {}",
        hexes.len(),
        radius,
        center
    );

    Ok(hexes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex_norm;

    #[test]
    fn test_center_zero_radius_zero() {
        let hexes = hex_range(Hex::<i32>::ZERO, 0).unwrap();
        assert_eq!(hexes.len(), 1);
        assert!(hexes.contains(&Hex::ZERO));
        assert!(!hexes.contains(&Hex::LEFT_UP));
    }

    #[test]
    fn test_radius_one() {
        let center = Hex::new_qr(3, 3);
        let hexes = hex_range(center, 1).unwrap();
        let expected: HexSet<i32> =
            std::iter::once(center).chain(center.adjacents()).collect();
        assert_eq!(hexes, expected);
    }

    #[test]
    fn test_all_within_radius() {
        let center = Hex::new_qr(-2i64, 5);
        let hexes = hex_range(center, 6).unwrap();
        assert_eq!(hexes.len(), 127);
        for hex in &hexes {
            assert!(hex_norm(*hex - center) <= 6, "{} is out of range", hex);
        }
    }

    #[test]
    fn test_negative_radius() {
        let err = hex_range(Hex::<i16>::ZERO, -1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid radius -1; must be non-negative");
    }
}
