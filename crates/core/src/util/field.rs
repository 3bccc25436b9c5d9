use nalgebra::RealField;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops,
};

/// A numeric type that can be used as the component type of a [Point] or a
/// [Hex]. This covers signed integers and floats. Unsigned integers are left
/// out on purpose, since negation is a core hex operation.
///
/// Method names are chosen to not collide with [RealField], so that any
/// [Real] type can call both sets of methods without qualification.
///
/// [Point]: crate::Point
/// [Hex]: crate::Hex
pub trait Field:
    Copy
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + ops::Add<Self, Output = Self>
    + ops::Sub<Self, Output = Self>
    + ops::Mul<Self, Output = Self>
    + ops::Div<Self, Output = Self>
    + ops::Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    /// Maximum allowed drift from zero when validating that three cube
    /// components sum to zero. Zero for integers.
    const CUBE_TOLERANCE: Self;

    /// Absolute value
    fn absolute(self) -> Self;

    /// Is this value NaN? Always false for integers.
    fn is_not_a_number(self) -> bool;

    /// Widen this value to `f64`, the type all real-valued intermediate math
    /// is done in.
    fn into_f64(self) -> f64;

    /// Convert an `f64` into this type. Integers round half away from zero,
    /// then saturate at their bounds (NaN maps to zero).
    fn cast_f64(value: f64) -> Self;
}

/// A [Field] that only holds whole numbers. On-lattice hexes always use an
/// integer field.
pub trait Integer: Field + Eq + Ord + Hash {}

/// A floating-point [Field] that can also be used for linear algebra. This is
/// the type that [Basis](crate::Basis) does its transforms in, and the type of
/// every fractional hex.
pub trait Real: Field + RealField {}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Field for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const NEG_ONE: Self = -1;
                const TWO: Self = 2;
                const CUBE_TOLERANCE: Self = 0;

                fn absolute(self) -> Self {
                    self.abs()
                }

                fn is_not_a_number(self) -> bool {
                    false
                }

                fn into_f64(self) -> f64 {
                    self as f64
                }

                fn cast_f64(value: f64) -> Self {
                    // `as` saturates for floats, so out of range values
                    // clamp instead of wrapping
                    value.round() as Self
                }
            }

            impl Integer for $t {}
        )*
    };
}

macro_rules! impl_real {
    ($($t:ty),*) => {
        $(
            impl Field for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const NEG_ONE: Self = -1.0;
                const TWO: Self = 2.0;
                const CUBE_TOLERANCE: Self = 0.01;

                fn absolute(self) -> Self {
                    self.abs()
                }

                fn is_not_a_number(self) -> bool {
                    self.is_nan()
                }

                fn into_f64(self) -> f64 {
                    self as f64
                }

                fn cast_f64(value: f64) -> Self {
                    value as Self
                }
            }

            impl Real for $t {}
        )*
    };
}

impl_integer!(i16, i32, i64, isize);
impl_real!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_cast_f64() {
        assert_eq!(i32::cast_f64(2.4), 2);
        assert_eq!(i32::cast_f64(2.5), 3);
        assert_eq!(i32::cast_f64(-2.5), -3);
        assert_eq!(i16::cast_f64(1e9), i16::MAX);
        assert_eq!(i16::cast_f64(-1e9), i16::MIN);
        assert_eq!(i64::cast_f64(f64::NAN), 0);
    }

    #[test]
    fn test_not_a_number() {
        assert!(!7i64.is_not_a_number());
        assert!(!f64::INFINITY.is_not_a_number());
        assert!(f32::NAN.is_not_a_number());
    }
}
