//! Points in screen space. Screen space is a plain 2D cartesian plane, usually
//! measured in pixels. See [crate::Basis] for converting between screen space
//! and hex space.

use crate::util::field::{Field, Integer};
use anyhow::anyhow;
use derive_more::{Add, Display, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// A 2D point in screen space. The component type is generic, so this can be
/// used for both integer pixel coordinates and real-valued positions.
///
/// Points are validated on construction: neither component may be NaN.
/// Infinities are allowed, and are carried through arithmetic like any other
/// float would.
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
#[display(fmt = "({}, {})", x, y)]
#[serde(
    try_from = "UncheckedPoint<F>",
    bound(deserialize = "F: Field + Deserialize<'de>")
)]
pub struct Point<F: Field> {
    x: F,
    y: F,
}

impl<F: Field> Point<F> {
    pub const ZERO: Self = Self::new_unchecked(F::ZERO, F::ZERO);
    pub const RIGHT: Self = Self::new_unchecked(F::ONE, F::ZERO);
    pub const LEFT: Self = Self::new_unchecked(F::NEG_ONE, F::ZERO);
    pub const UP: Self = Self::new_unchecked(F::ZERO, F::ONE);
    pub const DOWN: Self = Self::new_unchecked(F::ZERO, F::NEG_ONE);

    /// Construct a new point. Returns an error if either component is NaN.
    pub fn new(x: F, y: F) -> anyhow::Result<Self> {
        if x.is_not_a_number() || y.is_not_a_number() {
            Err(anyhow!(
                "Invalid point ({}, {}); components cannot be NaN",
                x,
                y
            ))
        } else {
            Ok(Self { x, y })
        }
    }

    /// Skip validation. Only for use when the components are known to be
    /// valid, e.g. when they came out of a rounding operation.
    pub(crate) const fn new_unchecked(x: F, y: F) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> F {
        self.x
    }

    pub fn y(&self) -> F {
        self.y
    }

    /// Euclidean length of this point, as if it were a vector from the origin
    pub fn norm(self) -> f64 {
        let x = self.x.into_f64();
        let y = self.y.into_f64();
        (x * x + y * y).sqrt()
    }

    /// Squared euclidean length, i.e. `x² + y²`. Unlike [Self::norm], this
    /// stays in the component type.
    pub fn sqnorm(self) -> F {
        self.x * self.x + self.y * self.y
    }
}

impl<I: Integer> Point<I> {
    /// Construct a point with integer components. Integers can't be NaN, so
    /// this can't fail.
    pub const fn new_xy(x: I, y: I) -> Self {
        Self::new_unchecked(x, y)
    }
}

/// Deserialization target for [Point]. This gets converted into a [Point]
/// via [TryFrom], so that deserialized points get validated.
#[derive(Deserialize)]
#[serde(rename = "Point")]
struct UncheckedPoint<F> {
    x: F,
    y: F,
}

impl<F: Field> TryFrom<UncheckedPoint<F>> for Point<F> {
    type Error = anyhow::Error;

    fn try_from(value: UncheckedPoint<F>) -> Result<Self, Self::Error> {
        Self::new(value.x, value.y)
    }
}
