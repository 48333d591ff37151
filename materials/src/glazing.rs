//! Glazing Material

use crate::cal;
use optics::common::Float;
use optics::roos;
use std::fmt::{self, Write};

/// Angle-dependent transmittance and reflectance of a thin glazing layer,
/// using the Roos curve fit.
///
/// The renderer evaluates a material once per traced ray, so the falloff
/// coefficients that depend only on the shape parameters are computed at
/// construction and the per-ray paths stay free of branches and divisions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlazingMaterial {
    /// Normal-incidence transmittance. Expected in [0, 1].
    t0: Float,

    /// Normal-incidence reflectance. Expected in [0, 1].
    r0: Float,

    /// Pane shape parameter of the angular falloff curve.
    p: Float,

    /// Coating shape parameter of the angular falloff curve. Non-zero.
    q: Float,

    /// Derived coefficient `b = 0.25 / q` of the transmittance fit.
    b: Float,

    /// Derived exponent `alpha = 5.2 + 0.7 q` of the transmittance fit.
    alpha: Float,

    /// Derived exponent `gamma`, shared by both fits.
    gamma: Float,
}

impl GlazingMaterial {
    /// Create a new `GlazingMaterial`, rejecting a zero `q` so that malformed
    /// material tables fail at configuration time instead of corrupting a
    /// simulation run.
    ///
    /// Out-of-range `t0`/`r0` are passed through unclamped (the engine owns
    /// its material tables) but logged, since they usually indicate a typo in
    /// a material definition.
    ///
    /// * `t0` - Normal-incidence transmittance, expected in [0, 1].
    /// * `r0` - Normal-incidence reflectance, expected in [0, 1].
    /// * `p`  - Pane shape parameter of the angular falloff curve.
    /// * `q`  - Coating shape parameter of the angular falloff curve; must be
    ///          non-zero.
    pub fn new(t0: Float, r0: Float, p: Float, q: Float) -> Result<Self, roos::Error> {
        if q == 0.0 {
            return Err(roos::Error::ZeroShapeParameter);
        }
        if !(0.0..=1.0).contains(&t0) {
            warn!("normal-incidence transmittance {t0} is outside [0, 1]");
        }
        if !(0.0..=1.0).contains(&r0) {
            warn!("normal-incidence reflectance {r0} is outside [0, 1]");
        }

        Ok(Self {
            t0,
            r0,
            p,
            q,
            b: 0.25 / q,
            alpha: 5.2 + 0.7 * q,
            gamma: roos::falloff_exponent(p, q),
        })
    }

    /// Returns the normal-incidence transmittance.
    pub fn t0(&self) -> Float {
        self.t0
    }

    /// Returns the normal-incidence reflectance.
    pub fn r0(&self) -> Float {
        self.r0
    }

    /// Returns the pane shape parameter.
    pub fn p(&self) -> Float {
        self.p
    }

    /// Returns the coating shape parameter.
    pub fn q(&self) -> Float {
        self.q
    }

    /// Returns the directional transmittance for one incident ray. Matches
    /// `optics::roos::transmittance` bit for bit.
    ///
    /// * `r_dot` - Cosine of the angle between the incident ray direction and
    ///             the surface normal.
    pub fn transmittance(&self, r_dot: Float) -> Float {
        let z = roos::normalized_angle(r_dot);
        let c = 1.0 - roos::A - self.b;
        self.t0
            * (1.0
                - roos::A * roos::pow(z, self.alpha)
                - self.b * roos::pow(z, roos::BETA)
                - c * roos::pow(z, self.gamma))
    }

    /// Returns the directional reflectance for one incident ray. Matches
    /// `optics::roos::reflectance` bit for bit.
    ///
    /// * `r_dot` - Cosine of the angle between the incident ray direction and
    ///             the surface normal.
    pub fn reflectance(&self, r_dot: Float) -> Float {
        let z = roos::normalized_angle(r_dot);
        self.r0 + (1.0 - self.r0) * roos::pow(z, self.gamma)
    }

    /// Writes the Radiance function file for this material: the shared model
    /// definitions followed by `tau_<name>` and `rho_<name>` formulas with
    /// this material's coefficients substituted.
    ///
    /// * `name` - Identifier used to suffix the material's formulas; must be
    ///            a valid Radiance identifier.
    /// * `out`  - Output writer.
    pub fn write_cal<W: Write>(&self, name: &str, out: &mut W) -> fmt::Result {
        cal::write_material(self, name, out)
    }

    /// Returns the Radiance function file for this material as a string.
    ///
    /// * `name` - Identifier used to suffix the material's formulas.
    pub fn to_cal(&self, name: &str) -> String {
        let mut out = String::new();
        self.write_cal(name, &mut out)
            .expect("writing to a String cannot fail");
        out
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
