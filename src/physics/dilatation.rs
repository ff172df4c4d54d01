//! Dilatation `θ`, the nonlocal volumetric strain at a point:
//!
//! θ = (3 / m) Σ_q ω(|ξ|) (1 - d) |ξ| e V_q
//!
//! with `e` the scalar bond extension and `d` the bond damage.

use glam::DVec3;

use super::bond::Bond;
use super::OMEGA;
use crate::error::Result;
use crate::geometry::{Configuration, Discretization, Neighborhood};

/// Dilatation of a single point given its weighted volume `m`.
///
/// The batch kernel evaluates every owned point through this function, so
/// the two agree exactly.
pub fn dilatation_at(hood: &Neighborhood, cfg: &Configuration, m: f64) -> f64 {
    let mut theta = 0.0;
    for (n, &q) in hood.neighbors.iter().enumerate() {
        let bond = Bond::new(hood.x, hood.y, cfg.reference[q], cfg.current[q]);
        theta += 3.0 * OMEGA * hood.intact(n) * bond.zeta * bond.extension() * cfg.volume[q] / m;
    }
    theta
}

/// Dilatation of every owned point.
///
/// `m` and `theta` hold one entry per owned point, `damage` one entry per
/// bond, `current` one position per overlap point.
pub fn compute_dilatation(
    disc: &Discretization,
    current: &[DVec3],
    m: &[f64],
    damage: &[f64],
    theta: &mut [f64],
) -> Result<()> {
    disc.check_overlap("current positions", current.len())?;
    disc.check_owned("weighted volume", m.len())?;
    disc.check_bonds("bond damage", damage.len())?;
    disc.check_owned("dilatation", theta.len())?;

    let cfg = disc.configuration(current);
    for (p, theta_p) in theta.iter_mut().enumerate() {
        let hood = disc.neighborhood(p, current, Some(damage));
        *theta_p = dilatation_at(&hood, &cfg, m[p]);
    }
    Ok(())
}
