//! This module holds the hex coordinate type and the algorithms built on top
//! of it.
//!
//! ## Coordinate System
//!
//! Hex space uses the [cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three components (`q`, `r`, and `s`), constrained to
//! the plane `q + r + s = 0`. Working in three dimensions makes distance,
//! rounding and interpolation much simpler than any 2D offset scheme.
//!
//! Because of that constraint, only two components are independent. [Hex]
//! stores `q` and `r` (the "axial" coordinates) and derives `s` whenever it's
//! needed, so the constraint can never be broken by a stray mutation.
//!
//! Integer hexes refer to tile centers. Real-valued hexes can refer to any
//! point on the plane, and are mostly an intermediate value, e.g. the output
//! of [Basis::hex](crate::Basis::hex). Use [hex_round] to snap one of those
//! back onto the lattice.
//!
//! ## Directions
//!
//! The six unit steps on the lattice are named from the perspective of an
//! axial grid drawn with `q` pointing forward and `r` pointing down:
//!
//! | Direction     | `(q, r)`  |
//! |---------------|-----------|
//! | `LeftUp`      | `(0, -1)` |
//! | `ForwardLeft` | `(1, -1)` |
//! | `ForwardDown` | `(1, 0)`  |
//! | `RightDown`   | `(0, 1)`  |
//! | `BackRight`   | `(-1, 1)` |
//! | `BackUp`      | `(-1, 0)` |

mod line;
mod range;
mod round;

pub use self::{line::*, range::*, round::*};

use crate::util::field::{Field, Integer};
use anyhow::anyhow;
use derive_more::{Add, Display, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use strum::{EnumIter, IntoEnumIterator};

/// A coordinate in hex space. See the module-level docs for a description of
/// the coordinate system.
///
/// The component type is generic. Integer hexes are on-lattice (tile centers),
/// real hexes are fractional and can fall anywhere.
///
/// Two hexes are equal iff their `q` and `r` components are equal; `s` is
/// derived so it never needs to be compared.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "<{}, {}, {}>", "self.q", "self.r", "self.s()")]
#[serde(
    try_from = "UncheckedHex<F>",
    bound(deserialize = "F: Field + Deserialize<'de>")
)]
pub struct Hex<F: Field> {
    q: F,
    r: F,
}

impl<F: Field> Hex<F> {
    pub const ZERO: Self = Self::new_unchecked(F::ZERO, F::ZERO);
    pub const LEFT_UP: Self = Self::new_unchecked(F::ZERO, F::NEG_ONE);
    pub const FORWARD_LEFT: Self = Self::new_unchecked(F::ONE, F::NEG_ONE);
    pub const FORWARD_DOWN: Self = Self::new_unchecked(F::ONE, F::ZERO);
    pub const RIGHT_DOWN: Self = Self::new_unchecked(F::ZERO, F::ONE);
    pub const BACK_RIGHT: Self = Self::new_unchecked(F::NEG_ONE, F::ONE);
    pub const BACK_UP: Self = Self::new_unchecked(F::NEG_ONE, F::ZERO);

    /// Construct a hex from axial coordinates. The third cube component is
    /// derived. Returns an error if any of the three components is NaN,
    /// which includes opposite infinities for `q` and `r`.
    pub fn new(q: F, r: F) -> anyhow::Result<Self> {
        if q.is_not_a_number() || r.is_not_a_number() {
            Err(anyhow!(
                "Invalid hex ({}, {}); components cannot be NaN",
                q,
                r
            ))
        } else if (q.into_f64() + r.into_f64()).is_nan() {
            // Summed in f64 so integer components can't overflow
            Err(anyhow!(
                "Invalid hex ({}, {}); derived s component cannot be NaN",
                q,
                r
            ))
        } else {
            Ok(Self { q, r })
        }
    }

    /// Construct a hex from all three cube coordinates. Returns an error if
    /// any component is NaN, or if the components don't sum to zero. Real
    /// components are allowed to drift from zero by a small tolerance (see
    /// [Field::CUBE_TOLERANCE]); integer components must sum to exactly zero.
    pub fn new_cube(q: F, r: F, s: F) -> anyhow::Result<Self> {
        if s.is_not_a_number() {
            return Err(anyhow!(
                "Invalid hex ({}, {}, {}); components cannot be NaN",
                q,
                r,
                s
            ));
        }
        let hex = Self::new(q, r)?;
        if (q + r + s).absolute() > F::CUBE_TOLERANCE {
            Err(anyhow!(
                "Invalid hex ({}, {}, {}); must be on the plane q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(hex)
        }
    }

    /// Skip validation. Only for use when the components are known not to be
    /// NaN.
    pub(crate) const fn new_unchecked(q: F, r: F) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> F {
        self.q
    }

    pub fn r(&self) -> F {
        self.r
    }

    /// The third cube component. Since q+r+s=0 for all hexes, this is always
    /// derived from the other two.
    pub fn s(&self) -> F {
        -self.q - self.r
    }

    /// Lattice length of this hex, i.e. the number of steps from the origin.
    /// Alias for [hex_norm].
    pub fn norm(self) -> F {
        hex_norm(self)
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance_to(self, other: Self) -> F {
        hex_norm(self - other)
    }

    /// Get the hex one step away from this one, in the given direction
    pub fn adjacent(self, direction: HexDirection) -> Self {
        self + direction.to_hex()
    }

    /// Get an iterator of all the hexes directly adjacent to this one. The
    /// iterator will always contain exactly 6 values, ordered the same as
    /// [HexDirection::iter].
    pub fn adjacents(self) -> impl Iterator<Item = Self> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }
}

impl<I: Integer> Hex<I> {
    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// hexes, we can derive s from q & r.
    pub const fn new_qr(q: I, r: I) -> Self {
        Self::new_unchecked(q, r)
    }

    /// Construct a new hex with the given q and s. Since q+r+s=0 for all
    /// hexes, we can derive r from q & s.
    pub fn new_qs(q: I, s: I) -> Self {
        Self::new_unchecked(q, -q - s)
    }

    /// Construct a new hex with the given r and s. Since q+r+s=0 for all
    /// hexes, we can derive q from r & s.
    pub fn new_rs(r: I, s: I) -> Self {
        Self::new_unchecked(-r - s, r)
    }
}

/// Calculate the hex norm of `hex`, which is its distance from the origin in
/// lattice steps: `(|q| + |r| + |s|) / 2`.
///
/// For integer hexes the numerator is always even, because `|q| + |r| + |s|`
/// has the same parity as `q + r + s = 0`. So the integer division never
/// truncates.
pub fn hex_norm<F: Field>(hex: Hex<F>) -> F {
    // https://www.redblobgames.com/grids/hexagons/#distances
    (hex.q.absolute() + hex.r.absolute() + hex.s().absolute())
        // Two adjacent hexes are always separated by two cube edges
        / F::TWO
}

/// Deserialization target for [Hex]. This gets converted into a [Hex] via
/// [TryFrom], so that deserialized hexes get validated.
#[derive(Deserialize)]
#[serde(rename = "Hex")]
struct UncheckedHex<F> {
    q: F,
    r: F,
}

impl<F: Field> TryFrom<UncheckedHex<F>> for Hex<F> {
    type Error = anyhow::Error;

    fn try_from(value: UncheckedHex<F>) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r)
    }
}

/// The 6 directions in which hexes can line up side-to-side. Each direction
/// corresponds to one of the named unit hexes, e.g. [Hex::LEFT_UP].
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    LeftUp,
    ForwardLeft,
    ForwardDown,
    RightDown,
    BackRight,
    BackUp,
}

impl HexDirection {
    /// Get the unit hex that would move a hex one step in this direction
    pub fn to_hex<F: Field>(self) -> Hex<F> {
        match self {
            Self::LeftUp => Hex::LEFT_UP,
            Self::ForwardLeft => Hex::FORWARD_LEFT,
            Self::ForwardDown => Hex::FORWARD_DOWN,
            Self::RightDown => Hex::RIGHT_DOWN,
            Self::BackRight => Hex::BACK_RIGHT,
            Self::BackUp => Hex::BACK_UP,
        }
    }

    /// Get the direction that points directly opposite this one
    pub fn opposite(self) -> Self {
        match self {
            Self::LeftUp => Self::RightDown,
            Self::ForwardLeft => Self::BackRight,
            Self::ForwardDown => Self::BackUp,
            Self::RightDown => Self::LeftUp,
            Self::BackRight => Self::ForwardLeft,
            Self::BackUp => Self::ForwardDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_all_int_components_zero() {
        let h = Hex::new_qr(0, 0);
        assert_eq!(h.q(), 0);
        assert_eq!(h.r(), 0);
        assert_eq!(h.s(), 0);
        assert_eq!(hex_norm(h), 0);
        assert_eq!(-h, Hex::ZERO);
        assert_eq!(h + h, Hex::ZERO);
        assert_eq!(h - h, Hex::ZERO);
    }

    #[test]
    fn test_derived_s() {
        let h = Hex::new_qr(3, -5);
        assert_eq!(h.s(), 2);
        assert_eq!(Hex::new_qs(3, 2), h);
        assert_eq!(Hex::new_rs(-5, 2), h);
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(Hex::new(f64::NAN, 1.0).is_err());
        assert!(Hex::new(1.0, f32::NAN).is_err());
        assert!(Hex::new(f64::INFINITY, 1.0).is_ok());
        assert!(Hex::new(f32::INFINITY, f32::INFINITY).is_ok());

        // s = -q - r would be NaN
        let err = Hex::new(f64::INFINITY, f64::NEG_INFINITY).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid hex (inf, -inf); derived s component cannot be NaN"
        );
        assert!(Hex::new_cube(f32::NEG_INFINITY, f32::INFINITY, 0.0).is_err());
        assert!(Hex::new(i16::MAX, i16::MAX).is_ok());
    }

    #[test]
    fn test_new_cube() {
        assert_eq!(Hex::new_cube(1, 2, -3).unwrap(), Hex::new_qr(1, 2));
        assert!(Hex::new_cube(1, 2, -2).is_err());

        // Reals get a bit of slack
        let h = Hex::new_cube(0.5, 0.25, -0.751).unwrap();
        assert_eq!(h.q(), 0.5);
        assert_eq!(h.r(), 0.25);
        assert!(Hex::new_cube(0.5, 0.25, -0.5).is_err());
        assert!(Hex::new_cube(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_hex_norm() {
        assert_eq!(hex_norm(Hex::new_qr(0, 7)), 7);
        assert_eq!(hex_norm(Hex::new_qr(-20, 20)), 20);
        assert_eq!(hex_norm(Hex::new_qr(3, 4)), 7);
        assert_approx_eq!(hex_norm(Hex::new(2.5f64, 0.0).unwrap()), 2.5);
    }

    #[test]
    fn test_distance_to() {
        let p0 = Hex::<i32>::ZERO;
        let p1 = Hex::new_qr(-1, 1);
        let p2 = Hex::new_qr(2, -1);
        let p3 = Hex::new_qr(2, -3);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p1.distance_to(p3), 4);
        assert_eq!(p2.distance_to(p3), 2);
    }

    #[test]
    fn test_directions() {
        let dirs: Vec<Hex<i16>> =
            HexDirection::iter().map(HexDirection::to_hex).collect();
        assert_eq!(
            dirs,
            vec![
                Hex::LEFT_UP,
                Hex::FORWARD_LEFT,
                Hex::FORWARD_DOWN,
                Hex::RIGHT_DOWN,
                Hex::BACK_RIGHT,
                Hex::BACK_UP
            ]
        );
        for dir in HexDirection::iter() {
            let unit: Hex<i32> = dir.to_hex();
            assert_eq!(hex_norm(unit), 1);
            assert_eq!(unit + dir.opposite().to_hex(), Hex::ZERO);
        }
    }

    #[test]
    fn test_adjacents() {
        let center = Hex::new_qr(4, -9);
        let adjacents: Vec<_> = center.adjacents().collect();
        assert_eq!(adjacents.len(), 6);
        assert_eq!(adjacents[0], Hex::new_qr(4, -10));
        for adj in adjacents {
            assert_eq!(center.distance_to(adj), 1);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Hex::new_qr(1, 2).to_string(), "<1, 2, -3>");
    }

    #[test]
    fn test_direction_serde() {
        assert_tokens(
            &HexDirection::ForwardLeft,
            &[Token::UnitVariant {
                name: "HexDirection",
                variant: "forward_left",
            }],
        );
        assert_tokens(
            &HexDirection::BackUp,
            &[Token::UnitVariant {
                name: "HexDirection",
                variant: "back_up",
            }],
        );
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &Hex::new_qr(1i64, -4),
            &[
                Token::Struct {
                    name: "Hex",
                    len: 2,
                },
                Token::Str("q"),
                Token::I64(1),
                Token::Str("r"),
                Token::I64(-4),
                Token::StructEnd,
            ],
        );
        assert_de_tokens_error::<Hex<f32>>(
            &[
                Token::Struct {
                    name: "Hex",
                    len: 2,
                },
                Token::Str("q"),
                Token::F32(0.0),
                Token::Str("r"),
                Token::F32(f32::NAN),
                Token::StructEnd,
            ],
            "Invalid hex (0, NaN); components cannot be NaN",
        );
    }
}
