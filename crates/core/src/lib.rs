//! Tess is a toolkit for working with hexagonal grids. It provides hex and
//! point types, the core lattice algorithms (rounding, lines, ranges), and a
//! [Basis] for converting between hex space and screen space. Drawing is left
//! to the caller.
//!
//! ```
//! use tess::{hex_range, line, Basis, Hex, HexTop, Point};
//!
//! # fn main() -> anyhow::Result<()> {
//! let basis = Basis::new(Point::new(400.0, 300.0)?, 20.0, HexTop::Pointed)?;
//!
//! // Find where a tile should be drawn, and which tile is under the cursor
//! let center: Point<i32> = basis.pixel(Hex::new_qr(2, -1));
//! assert_eq!(center, Point::new_xy(452, 270));
//! let hex: Hex<i32> = basis.hex_at(center);
//! assert_eq!(hex, Hex::new_qr(2, -1));
//!
//! // Everything within two steps of that tile
//! assert_eq!(hex_range(hex, 2)?.len(), 19);
//!
//! // Path from the origin out to it
//! assert_eq!(line(Hex::ZERO, hex).count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! Every coordinate type is generic over its component type. Integer hexes
//! are tiles, real hexes are arbitrary points in hex space. See [Field] for
//! the supported component types.

mod basis;
pub mod hex;
mod point;
mod util;

pub use crate::{
    basis::{Basis, BasisConfig, HexTop},
    hex::{
        hex_norm, hex_range, hex_round, line, Hex, HexDirection, HexSet, Line,
    },
    point::Point,
    util::{
        field::{Field, Integer, Real},
        hex_range_len,
    },
};
