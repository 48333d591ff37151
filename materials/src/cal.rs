//! Radiance function file output
//!
//! The external renderer couples to the glazing model through a function
//! file: a small set of named scalar formulas in which the only control flow
//! is the `if(cond, then, else)` ternary. `Rdot`, the cosine of the incidence
//! angle, is supplied per ray by the renderer; everything else is plain
//! arithmetic over the material coefficients.

use crate::GlazingMaterial;
use std::fmt::{self, Write};

/// The material-independent model definitions:
///
/// * `abs` / `bnd` - absolute value and clamp to [-1, 1], as `if` ternaries.
/// * `zc`          - normalized incidence angle in [0, 1].
/// * `pw`          - power function with the zero-base-yields-zero convention.
/// * `gam`         - shared falloff exponent.
/// * `taud`/`rhod` - directional transmittance and reflectance, parameterized
///                   over the material coefficients.
const MODEL_DEFS: &str = "\
{ Roos angular glazing model }
abs(x) = if(x, x, -x);
bnd(rd) = if(rd - 1, 1, if(rd + 1, rd, -1));
zc(rd) = 0.636619772368 * acos(abs(bnd(rd)));
pw(x, e) = if(x, exp(e * log(x)), 0);
gam(p, q) = 5.26 + 0.06*p + (0.73 + 0.04*p)*q;
taud(rd, t0, p, q) = t0 * (1 - 8*pw(zc(rd), 5.2 + 0.7*q) - 0.25/q*pw(zc(rd), 2) - (1 - 8 - 0.25/q)*pw(zc(rd), gam(p, q)));
rhod(rd, r0, p, q) = r0 + (1 - r0)*pw(zc(rd), gam(p, q));
";

/// Writes the material-independent formulas of the glazing model.
///
/// * `out` - Output writer.
pub fn write_model_defs<W: Write>(out: &mut W) -> fmt::Result {
    out.write_str(MODEL_DEFS)
}

/// Writes a complete function file for one material: the model definitions
/// followed by `tau_<name>` and `rho_<name>` formulas with the material's
/// coefficients substituted. The specialized formulas take no arguments and
/// read the renderer's `Rdot` directly, which is how `BRTDfunc` primitives
/// reference them.
///
/// * `material` - The glazing material.
/// * `name`     - Identifier used to suffix the material's formulas.
/// * `out`      - Output writer.
pub(crate) fn write_material<W: Write>(
    material: &GlazingMaterial,
    name: &str,
    out: &mut W,
) -> fmt::Result {
    writeln!(
        out,
        "{{ {name}: glazing, t0={} r0={} p={} q={} }}",
        material.t0(),
        material.r0(),
        material.p(),
        material.q()
    )?;
    write_model_defs(out)?;
    writeln!(
        out,
        "tau_{name} = taud(Rdot, {}, {}, {});",
        material.t0(),
        material.p(),
        material.q()
    )?;
    writeln!(
        out,
        "rho_{name} = rhod(Rdot, {}, {}, {});",
        material.r0(),
        material.p(),
        material.q()
    )
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
