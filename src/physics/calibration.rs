//! Shear-modulus calibration probes.
//!
//! A point deep inside a body sees a full horizon sphere; near a free
//! surface part of the sphere is missing and the discrete deviatoric
//! energy under a given shear is too low. The scale factor compares the
//! continuum value of `||e_d||²` for simple shear of magnitude γ over a full
//! sphere of radius δ (uniform influence function),
//!
//! ||e_d||² = 4π γ² δ⁵ / 75,
//!
//! with the discrete sum over the point's actual neighborhood.

use std::f64::consts::PI;

use glam::DVec3;

use super::deviatoric::deviatoric_force_state_norm;
use super::dilatation::dilatation_at;
use super::weighted_volume::weighted_volume_at;
use crate::error::Result;
use crate::geometry::{set_pure_shear, Configuration, Discretization, Neighborhood, PureShear};

/// Shear magnitude used by [`compute_shear_correction_factor`]
pub const SHEAR_PROBE_GAMMA: f64 = 1.0e-6;

/// Continuum `||e_d||²` of simple shear `gamma` over a full horizon sphere
pub fn continuum_shear_norm_squared(horizon: f64, gamma: f64) -> f64 {
    4.0 * PI * gamma * gamma * horizon.powi(5) / 75.0
}

/// Ratio of the continuum to the discrete deviatoric extension norm
/// (squared) at one point.
///
/// The neighborhood must already be in simple shear of magnitude `gamma`
/// relative to `hood.y` (see [`set_pure_shear`]); for a probe `hood.y` is
/// normally the reference position.
pub fn probe_shear_modulus_scale_factor(
    hood: &Neighborhood,
    cfg: &Configuration,
    horizon: f64,
    gamma: f64,
) -> f64 {
    let m = weighted_volume_at(hood.x, hood.neighbors, cfg.reference, cfg.volume);
    let theta = dilatation_at(hood, cfg, m);
    let ed_norm = deviatoric_force_state_norm(hood, cfg, theta, None, 1.0);
    continuum_shear_norm_squared(horizon, gamma) / (ed_norm * ed_norm)
}

/// Shear correction factor of every owned point.
///
/// Each point is probed in XY, XZ and YZ shear and the largest factor is
/// kept. `scratch` is caller-owned work space sized like the overlap
/// position field; its contents are overwritten. A point without neighbors
/// gets `+∞`.
pub fn compute_shear_correction_factor(
    disc: &Discretization,
    scratch: &mut [DVec3],
    horizon: f64,
    factors: &mut [f64],
) -> Result<()> {
    disc.check_overlap("shear scratch positions", scratch.len())?;
    disc.check_owned("shear correction factor", factors.len())?;

    let reference = disc.reference();
    let volume = disc.volume();
    let owned = disc.owned();

    for (p, factor) in factors.iter_mut().enumerate() {
        let slot = owned.slot(p);
        let x = reference[slot];
        let neighbors = disc.neighbors().neighbors(p);
        scratch[slot] = x;

        let mut largest = 0.0f64;
        for mode in PureShear::ALL {
            set_pure_shear(x, neighbors, reference, scratch, mode, SHEAR_PROBE_GAMMA);
            let cfg = Configuration {
                reference,
                current: scratch,
                volume,
            };
            let hood = Neighborhood::new(x, x, neighbors);
            largest = largest.max(probe_shear_modulus_scale_factor(
                &hood,
                &cfg,
                horizon,
                SHEAR_PROBE_GAMMA,
            ));
        }
        *factor = largest;
    }

    if log::log_enabled!(log::Level::Debug) {
        let min = factors.iter().copied().fold(f64::INFINITY, f64::min);
        let max = factors.iter().copied().fold(0.0f64, f64::max);
        log::debug!("Shear correction factors in [{:.4}, {:.4}]", min, max);
    }
    Ok(())
}
