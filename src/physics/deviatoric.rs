//! Norm of the deviatoric force state at one point.
//!
//! For each bond the trial deviatoric force scalar is
//! `t_d = α ω (e_d - e_dp)`, with `e_d = e - θ|ξ|/3` the deviatoric extension
//! and `e_dp` the deviatoric plastic extension carried by the bond. The norm
//! is the state inner product
//!
//! ||t_d|| = sqrt( Σ_q (1 - d) t_d² V_q )
//!
//! Calibration probes call it with `α = 1` and no plastic offset, which
//! gives the norm of the deviatoric extension state itself.

use super::bond::Bond;
use super::OMEGA;
use crate::geometry::{Configuration, Neighborhood};

/// Deviatoric force-state norm of a single point.
///
/// `plastic_extension`, when given, is aligned with `hood.neighbors`.
pub fn deviatoric_force_state_norm(
    hood: &Neighborhood,
    cfg: &Configuration,
    theta: f64,
    plastic_extension: Option<&[f64]>,
    alpha: f64,
) -> f64 {
    let mut norm_squared = 0.0;
    for (n, &q) in hood.neighbors.iter().enumerate() {
        let bond = Bond::new(hood.x, hood.y, cfg.reference[q], cfg.current[q]);
        let edp = plastic_extension.map_or(0.0, |e| e[n]);
        let td = alpha * OMEGA * (bond.deviatoric_extension(theta) - edp);
        norm_squared += hood.intact(n) * td * td * cfg.volume[q];
    }
    norm_squared.sqrt()
}
