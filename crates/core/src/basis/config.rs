use crate::HexTop;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Serializable description of a [Basis](crate::Basis). This is what
/// applications load from (or save to) a config file, and what gets validated
/// before a basis is built from it with
/// [Basis::from_config](crate::Basis::from_config).
///
/// A basis can't be changed once it's created. To reconfigure one, modify
/// the config (or use one of the `with_` methods on the basis) and build a new
/// one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BasisConfig {
    /// X position of the center of hex `(0, 0)`, in screen space
    pub origin_x: f64,

    /// Y position of the center of hex `(0, 0)`, in screen space
    pub origin_y: f64,

    /// Distance between the center of a hex and any of its vertices, in
    /// screen space. This is also the length of one side of a hex.
    #[validate(range(min = 0.001))]
    pub unit_size: f64,

    /// Whether hexes have a pointed vertex or a flat side at the top
    pub top: HexTop,
}

impl Default for BasisConfig {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            unit_size: 1.0,
            top: HexTop::Pointed,
        }
    }
}
