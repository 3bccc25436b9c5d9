use crate::{hex::hex_round, util::field::Integer, Hex};
use log::trace;
use std::iter::FusedIterator;

/// Calculate the hexes that make up a "straight" line from `start` to `end`,
/// inclusive on both ends. The returned iterator yields exactly
/// `hex_norm(start - end) + 1` hexes, in order from `start` to `end`. Adjacent
/// hexes in the line are always adjacent on the grid.
///
/// Any two hexes of the component type can be joined, even when their
/// difference wouldn't fit in that type; the distance is measured in `f64`.
///
/// ```
/// use tess::{line, Hex};
///
/// let hexes: Vec<Hex<i32>> = line(Hex::ZERO, Hex::new_qr(3, 0)).collect();
/// assert_eq!(
///     hexes,
///     vec![
///         Hex::new_qr(0, 0),
///         Hex::new_qr(1, 0),
///         Hex::new_qr(2, 0),
///         Hex::new_qr(3, 0),
///     ]
/// );
/// ```
pub fn line<I: Integer>(start: Hex<I>, end: Hex<I>) -> Line<I> {
    let dq = start.q().into_f64() - end.q().into_f64();
    let dr = start.r().into_f64() - end.r().into_f64();
    // Same as hex_norm, but without the overflow risk
    let steps = ((dq.abs() + dr.abs() + (dq + dr).abs()) / 2.0) as usize;
    trace!("Line from {} to {} has {} steps", start, end, steps);
    Line {
        start,
        end,
        steps,
        next_step: 0,
    }
}

/// Iterator over the hexes in a line. See [line].
///
/// Each intermediate hex is found by interpolating linearly (in `f64`)
/// between the two endpoints, then rounding the result with [hex_round]. The
/// endpoints themselves are never interpolated, so they are always reproduced
/// exactly.
#[derive(Clone, Debug)]
pub struct Line<I: Integer> {
    start: Hex<I>,
    end: Hex<I>,
    /// Distance between the endpoints. The line has one more hex than this.
    steps: usize,
    next_step: usize,
}

impl<I: Integer> Line<I> {
    fn interpolate(&self, step: usize) -> Hex<I> {
        fn lerp(a: f64, b: f64, t: f64) -> f64 {
            a + (b - a) * t
        }

        let t = step as f64 / self.steps as f64;
        let q = lerp(self.start.q().into_f64(), self.end.q().into_f64(), t);
        let r = lerp(self.start.r().into_f64(), self.end.r().into_f64(), t);
        // Both endpoints are finite, so the interpolation can't be NaN
        hex_round(Hex::new_unchecked(q, r))
    }
}

impl<I: Integer> Iterator for Line<I> {
    type Item = Hex<I>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.next_step;
        if step > self.steps {
            return None;
        }
        self.next_step += 1;

        let hex = if step == 0 {
            self.start
        } else if step == self.steps {
            self.end
        } else {
            self.interpolate(step)
        };
        Some(hex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next_step);
        (remaining, Some(remaining))
    }
}

impl<I: Integer> ExactSizeIterator for Line<I> {}

impl<I: Integer> FusedIterator for Line<I> {}
