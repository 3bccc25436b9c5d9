mod config;

pub use self::config::BasisConfig;

use crate::{
    hex_round,
    util::field::{Field, Integer, Real},
    Hex, Point,
};
use anyhow::{bail, Context};
use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// Whether hexes are drawn with a vertex or a side at the top. This changes
/// both the hex/screen transform and the angles of each hex's vertices.
///
/// See this page for pictures of each orientation:
/// https://www.redblobgames.com/grids/hexagons/#basics
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexTop {
    /// A vertex at the top, so columns of hexes zig-zag
    Pointed,
    /// A side at the top, so rows of hexes zig-zag
    Flat,
}

impl HexTop {
    /// Build the hex->screen matrix and its inverse, for hexes of the given
    /// size. The matrices map `(q, r)` to `(x, y)` and back, ignoring the
    /// origin.
    fn matrices<R: Real>(self, unit_size: R) -> (Matrix2<R>, Matrix2<R>) {
        let two = R::TWO;
        let three = R::cast_f64(3.0);
        let sqrt3 = three.sqrt();

        // https://www.redblobgames.com/grids/hexagons/#hex-to-pixel
        let (matrix, inverse) = match self {
            Self::Pointed => (
                Matrix2::new(sqrt3, sqrt3 / two, R::ZERO, three / two),
                Matrix2::new(
                    sqrt3 / three,
                    R::NEG_ONE / three,
                    R::ZERO,
                    two / three,
                ),
            ),
            Self::Flat => (
                Matrix2::new(three / two, R::ZERO, sqrt3 / two, sqrt3),
                Matrix2::new(
                    two / three,
                    R::ZERO,
                    R::NEG_ONE / three,
                    sqrt3 / three,
                ),
            ),
        };
        (matrix * unit_size, inverse / unit_size)
    }

    /// Angle of the first vertex of a hex, relative to the +x axis. Each
    /// subsequent vertex is another π/3 around.
    fn vertex_angle_offset<R: Real>(self) -> R {
        match self {
            Self::Pointed => R::pi() / R::cast_f64(6.0),
            Self::Flat => R::ZERO,
        }
    }
}

impl Default for HexTop {
    fn default() -> Self {
        Self::Pointed
    }
}

/// A basis converts between hex space and screen space. It's defined by the
/// screen position of hex `(0, 0)` (the origin), the size of each hex, and
/// the orientation of each hex. See [crate::hex] for a description of hex
/// space.
///
/// All transform math is done in the real type `R`. The hexes and points
/// going in and out can use any [Field] though. Pixel outputs are always
/// rounded to whole numbers (half away from zero) before being converted to
/// the output type.
///
/// A basis can't be modified after creation. Reconfiguring means building a
/// new one, which is cheap; the `with_` methods make that easy. That means a
/// basis can be shared freely between threads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Basis<R: Real> {
    origin: Point<R>,
    unit_size: R,
    top: HexTop,
    /// Maps `(q, r)` to a screen offset from the origin
    matrix: Matrix2<R>,
    /// Inverse of `matrix`
    inverse: Matrix2<R>,
}

impl<R: Real> Basis<R> {
    /// Create a new basis. Returns an error if `unit_size` isn't positive and
    /// finite, or if the origin isn't finite. With those checked, every
    /// transform of finite input gives finite output.
    pub fn new(
        origin: Point<R>,
        unit_size: R,
        top: HexTop,
    ) -> anyhow::Result<Self> {
        if !unit_size.is_finite() || unit_size <= R::ZERO {
            bail!(
                "Invalid unit size {}; must be positive and finite",
                unit_size
            );
        }
        if !origin.x().is_finite() || !origin.y().is_finite() {
            bail!("Invalid origin {}; must be finite", origin);
        }

        let (matrix, inverse) = top.matrices(unit_size);
        debug!(
            "Initialized {} basis at {} with unit size {}",
            top, origin, unit_size
        );
        Ok(Self {
            origin,
            unit_size,
            top,
            matrix,
            inverse,
        })
    }

    /// Create a new basis from a config. Returns an error if the config is
    /// invalid. Validation errors can be extracted from the returned error
    /// by downcasting it to [validator::ValidationErrors].
    pub fn from_config(config: &BasisConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid basis config")?;
        let origin = Point::new(
            R::cast_f64(config.origin_x),
            R::cast_f64(config.origin_y),
        )?;
        Self::new(origin, R::cast_f64(config.unit_size), config.top)
    }

    /// Get a config that describes this basis. Building a basis from the
    /// returned config will give back an identical basis.
    pub fn config(&self) -> BasisConfig {
        BasisConfig {
            origin_x: self.origin.x().into_f64(),
            origin_y: self.origin.y().into_f64(),
            unit_size: self.unit_size.into_f64(),
            top: self.top,
        }
    }

    /// The screen position of the center of hex `(0, 0)`
    pub fn origin(&self) -> Point<R> {
        self.origin
    }

    /// The distance between the center of a hex and any of its vertices, in
    /// screen space
    pub fn unit_size(&self) -> R {
        self.unit_size
    }

    pub fn top(&self) -> HexTop {
        self.top
    }

    /// The matrix that maps `(q, r)` to a screen offset from the origin
    pub fn matrix(&self) -> &Matrix2<R> {
        &self.matrix
    }

    /// The matrix that maps a screen offset from the origin to `(q, r)`.
    /// This is always the inverse of [Self::matrix].
    pub fn inverse(&self) -> &Matrix2<R> {
        &self.inverse
    }

    /// Build a copy of this basis, with a different origin. Returns an error
    /// if the new origin isn't finite.
    pub fn with_origin(&self, origin: Point<R>) -> anyhow::Result<Self> {
        Self::new(origin, self.unit_size, self.top)
    }

    /// Build a copy of this basis, with a different unit size. Returns an
    /// error if the new size isn't positive and finite.
    pub fn with_unit_size(&self, unit_size: R) -> anyhow::Result<Self> {
        Self::new(self.origin, unit_size, self.top)
    }

    /// Build a copy of this basis, with a different hex orientation
    pub fn with_top(&self, top: HexTop) -> Self {
        let (matrix, inverse) = top.matrices(self.unit_size);
        Self {
            top,
            matrix,
            inverse,
            ..*self
        }
    }

    /// Convert a hex to the screen position of its center
    pub fn pixel<F: Field>(&self, hex: Hex<F>) -> Point<F> {
        let hex: Vector2<R> = Vector2::new(real(hex.q()), real(hex.r()));
        let offset = self.matrix * hex;
        Point::new_unchecked(
            field::<F, R>(offset.x.round()) + field(self.origin.x()),
            field::<F, R>(offset.y.round()) + field(self.origin.y()),
        )
    }

    /// Convert a screen position to a point in hex space. The returned hex
    /// is **not** rounded, so it will generally fall somewhere between tile
    /// centers. Use [hex_round] (or [Self::hex_at]) to find which hex the
    /// point is in.
    pub fn hex<F: Field>(&self, point: Point<F>) -> Hex<R> {
        let offset: Vector2<R> = Vector2::new(
            real::<R, F>(point.x()) - self.origin.x(),
            real::<R, F>(point.y()) - self.origin.y(),
        );
        let hex = self.inverse * offset;
        Hex::new_unchecked(hex.x, hex.y)
    }

    /// Find the hex that contains a screen position. This is [Self::hex]
    /// followed by [hex_round].
    pub fn hex_at<I: Integer, F: Field>(&self, point: Point<F>) -> Hex<I> {
        hex_round(self.hex(point))
    }

    /// Calculate the screen positions of the 6 vertices of a hex. Vertices
    /// go counterclockwise (in a y-up space) starting from the one at angle
    /// π/6 for pointed hexes, or angle 0 for flat hexes. This order is stable,
    /// so the output can be drawn directly as a polygon.
    pub fn vertices<F: Field>(&self, hex: Hex<F>) -> [Point<F>; 6] {
        let center = self.pixel(hex);
        let center: Vector2<R> =
            Vector2::new(real(center.x()), real(center.y()));
        let offset: R = self.top.vertex_angle_offset();

        std::array::from_fn(|i| {
            let theta =
                offset + R::cast_f64(i as f64) * R::pi() / R::cast_f64(3.0);
            let direction: Vector2<R> = Vector2::new(theta.cos(), theta.sin());
            let vertex = center + direction * self.unit_size;
            Point::new_unchecked(
                field(vertex.x.round()),
                field(vertex.y.round()),
            )
        })
    }
}

/// Convert any field value into the transform type
fn real<R: Real, F: Field>(value: F) -> R {
    R::cast_f64(value.into_f64())
}

/// Convert a transform value back into some field type
fn field<F: Field, R: Real>(value: R) -> F {
    F::cast_f64(value.into_f64())
}
