//! Roos angular glazing model
//!
//! Empirical four-parameter curve fit for the angular dependence of glazing
//! transmittance (Roos et al.), adapted for reflectance as well. The external
//! renderer evaluates these functions once per traced ray against a surface,
//! feeding in the cosine of the incidence angle and reading back the
//! transmitted and reflected fractions.

use crate::common::*;
use thiserror::Error;

/// Fixed first-term coefficient `a` of the transmittance fit.
pub const A: Float = 8.0;

/// Fixed exponent `beta` of the middle falloff term.
pub const BETA: Float = 2.0;

/// Errors arising from evaluating the glazing model.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// The falloff shape parameter `q` was zero. The `b` coefficient of the
    /// transmittance fit is `0.25 / q`, so a zero `q` has no defined value and
    /// is rejected rather than propagated as a non-finite number.
    #[error("glazing shape parameter q must be non-zero")]
    ZeroShapeParameter,
}

/// Returns the normalized incidence angle in [0, 1]: 0 at normal incidence,
/// 1 at grazing incidence.
///
/// The cosine is clamped to [-1, 1] before the arccosine so that floating
/// point roundoff in the caller's dot product cannot push it out of the
/// function's domain, and its absolute value is taken so that rays striking
/// either face of the surface give the same angle. The result is capped at 1:
/// the truncated angle scale exceeds 2/π by ~4e-13, so the product overshoots
/// the unit interval at grazing incidence. Capping keeps the grazing angle
/// exactly 1, where the transmittance fit cancels exactly to zero.
///
/// * `r_dot` - Cosine of the angle between the incident ray direction and the
///             surface normal.
#[inline(always)]
pub fn normalized_angle(r_dot: Float) -> Float {
    min(abs(clamp(r_dot, -1.0, 1.0)).acos() * TWO_OVER_PI, 1.0)
}

/// Raises a non-negative base to a real exponent with the Radiance function
/// file convention that a zero base yields zero for every exponent, negative
/// exponents included.
///
/// This deviates from the mathematical power function deliberately: the
/// normalized angle is exactly zero at normal incidence, a common and valid
/// input, and the fit's exponents may make `0^e` otherwise undefined or
/// infinite.
///
/// * `base`     - The base; must be non-negative.
/// * `exponent` - The exponent.
#[inline(always)]
pub fn pow(base: Float, exponent: Float) -> Float {
    if base == 0.0 {
        0.0
    } else {
        (exponent * base.ln()).exp()
    }
}

/// Returns the exponent `gamma` of the sharpest falloff term, shared by the
/// transmittance and reflectance fits.
///
/// * `p` - Pane shape parameter of the angular falloff curve.
/// * `q` - Coating shape parameter of the angular falloff curve.
#[inline(always)]
pub fn falloff_exponent(p: Float, q: Float) -> Float {
    (5.26 + 0.06 * p) + (0.73 + 0.04 * p) * q
}

/// Returns the directional transmittance of a glazing layer.
///
/// The result is not clamped to [0, 1]: the fit itself can stray slightly
/// outside the physical range for out-of-range coefficients, and callers
/// needing a hard guarantee clamp downstream. `t0` is passed through
/// unclamped on the same grounds.
///
/// * `r_dot` - Cosine of the angle between the incident ray direction and the
///             surface normal.
/// * `t0`    - Normal-incidence transmittance, expected in [0, 1].
/// * `p`     - Pane shape parameter of the angular falloff curve.
/// * `q`     - Coating shape parameter of the angular falloff curve; must be
///             non-zero.
pub fn transmittance(r_dot: Float, t0: Float, p: Float, q: Float) -> Result<Float, Error> {
    if q == 0.0 {
        return Err(Error::ZeroShapeParameter);
    }

    let z = normalized_angle(r_dot);
    let b = 0.25 / q;
    // Forces the fit to zero at grazing incidence.
    let c = 1.0 - A - b;
    let alpha = 5.2 + 0.7 * q;
    let gamma = falloff_exponent(p, q);

    Ok(t0 * (1.0 - A * pow(z, alpha) - b * pow(z, BETA) - c * pow(z, gamma)))
}

/// Returns the directional reflectance of a glazing layer, rising from `r0`
/// at normal incidence to 1 at grazing incidence.
///
/// * `r_dot` - Cosine of the angle between the incident ray direction and the
///             surface normal.
/// * `r0`    - Normal-incidence reflectance, expected in [0, 1].
/// * `p`     - Pane shape parameter of the angular falloff curve.
/// * `q`     - Coating shape parameter of the angular falloff curve.
pub fn reflectance(r_dot: Float, r0: Float, p: Float, q: Float) -> Float {
    let z = normalized_angle(r_dot);
    r0 + (1.0 - r0) * pow(z, falloff_exponent(p, q))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn normalized_angle_is_0_at_normal_and_1_at_grazing_incidence() {
        assert_eq!(normalized_angle(1.0), 0.0);
        assert_eq!(normalized_angle(-1.0), 0.0);
        assert!(approx_eq!(Float, normalized_angle(0.0), 1.0, epsilon = 1e-9));
        // Without the unit-interval cap the truncated angle scale would leave
        // the grazing angle a hair above 1.
        assert_eq!(normalized_angle(0.0), 1.0);
    }

    #[test]
    fn normalized_angle_clamps_out_of_range_cosines() {
        assert_eq!(normalized_angle(1.0 + 1e-6), 0.0);
        assert_eq!(normalized_angle(-1.0 - 1e-6), 0.0);
        assert!(approx_eq!(
            Float,
            normalized_angle(1e10),
            normalized_angle(1.0),
            ulps = 2
        ));
    }

    #[test]
    fn pow_of_zero_base_is_zero_for_any_exponent() {
        assert_eq!(pow(0.0, 2.0), 0.0);
        assert_eq!(pow(0.0, 0.0), 0.0);
        assert_eq!(pow(0.0, -3.5), 0.0);
    }

    #[test]
    fn pow_of_unit_base_is_one() {
        assert_eq!(pow(1.0, 5.9), 1.0);
        assert_eq!(pow(1.0, -2.0), 1.0);
    }

    #[test]
    fn transmittance_at_normal_incidence_is_t0() {
        assert_eq!(transmittance(1.0, 0.8, 1.0, 1.0), Ok(0.8));
    }

    #[test]
    fn reflectance_at_normal_incidence_is_r0() {
        assert_eq!(reflectance(1.0, 0.05, 1.0, 1.0), 0.05);
    }

    #[test]
    fn transmittance_vanishes_at_grazing_incidence() {
        // `c = 1 - a - b` reuses the same computed `b`, so at a grazing angle
        // of exactly 1 the bracket cancels exactly, not just approximately.
        let tau = transmittance(0.0, 0.8, 1.0, 1.0).unwrap();
        assert_eq!(tau, 0.0);
    }

    #[test]
    fn reflectance_saturates_at_grazing_incidence() {
        assert_eq!(reflectance(0.0, 0.05, 1.0, 1.0), 1.0);
    }

    #[test]
    fn transmittance_rejects_zero_q() {
        assert_eq!(
            transmittance(0.5, 0.8, 1.0, 0.0),
            Err(Error::ZeroShapeParameter)
        );
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let first = transmittance(0.37, 0.74, 2.0, 1.0).unwrap();
        let second = transmittance(0.37, 0.74, 2.0, 1.0).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());

        let first = reflectance(0.37, 0.08, 2.0, 1.0);
        let second = reflectance(0.37, 0.08, 2.0, 1.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    proptest! {
        #[test]
        fn normalized_angle_ignores_the_sign_of_the_cosine(r_dot in -1.0..1.0f64) {
            prop_assert_eq!(normalized_angle(r_dot), normalized_angle(-r_dot));
        }

        #[test]
        fn normalized_angle_stays_in_unit_interval(r_dot in -10.0..10.0f64) {
            let z = normalized_angle(r_dot);
            prop_assert!((0.0..=1.0).contains(&z));
        }

        #[test]
        fn normalized_angle_does_not_increase_with_the_cosine_magnitude(
            a in 0.0..1.0f64,
            b in 0.0..1.0f64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(normalized_angle(hi) <= normalized_angle(lo));
        }

        #[test]
        fn transmittance_vanishes_at_grazing_incidence_for_all_shapes(
            p in 0.0..10.0f64,
            q in 0.05..10.0f64,
        ) {
            let tau = transmittance(0.0, 0.8, p, q).unwrap();
            prop_assert_eq!(tau, 0.0);
        }

        #[test]
        fn reflectance_at_normal_incidence_is_r0_for_all_shapes(
            r0 in 0.0..1.0f64,
            p in 0.0..10.0f64,
            q in 0.05..10.0f64,
        ) {
            prop_assert_eq!(reflectance(1.0, r0, p, q), r0);
        }
    }
}
