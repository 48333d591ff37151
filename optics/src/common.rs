//! Common

use num_traits::Num;
use std::ops::Neg;

/// Use 64-bit precision for floating point numbers.
pub type Float = f64;

/// PI (π)
pub const PI: Float = std::f64::consts::PI;

/// 2/PI (2/π) as written in the Radiance function-file convention. The
/// truncated literal is part of the wire format and is kept verbatim.
pub const TWO_OVER_PI: Float = 0.636619772368;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Clamps a value between given bounds.
///
/// * `x`   - The value.
/// * `min` - Lower bound.
/// * `max` - Upper bound.
#[inline(always)]
pub fn clamp<T>(x: T, min: T, max: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
