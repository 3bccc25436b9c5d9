use crate::{
    util::field::{Integer, Real},
    Hex,
};

/// Round a fractional hex to the nearest on-lattice hex.
///
/// Each cube component is rounded independently (half away from zero), which
/// can knock the result off the plane `q + r + s = 0`. To get back onto it,
/// the component that moved the furthest while rounding absorbs the total
/// drift. That component is the one we trust the least, so it's the one that
/// gets recomputed from the other two.
///
/// If two components tie for the largest rounding error, the first one in
/// `q, r, s` order gets corrected.
pub fn hex_round<I: Integer, R: Real>(hex: Hex<R>) -> Hex<I> {
    // https://www.redblobgames.com/grids/hexagons/#rounding
    let original = [hex.q(), hex.r(), hex.s()];
    let mut rounded = original.map(|component| component.round());

    // Strict comparison, so ties keep the earliest component
    let mut worst = 0;
    let mut worst_error = R::ZERO;
    for (i, (after, before)) in rounded.iter().zip(&original).enumerate() {
        let error = (*after - *before).absolute();
        if error > worst_error {
            worst = i;
            worst_error = error;
        }
    }

    let drift = rounded[0] + rounded[1] + rounded[2];
    rounded[worst] = rounded[worst] - drift;

    // Everything is integral now, so this conversion is exact (barring
    // overflow of the target type, which saturates)
    Hex::new_unchecked(
        I::cast_f64(rounded[0].into_f64()),
        I::cast_f64(rounded[1].into_f64()),
    )
}
