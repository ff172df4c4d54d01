//! Isotropic elastic-plastic peridynamic solid.
//!
//! The dilatational part of the force state stays elastic. The deviatoric
//! part is checked against the yield function
//!
//! f(t_d) = ||t_d||² / 2 - ψ₀,  ψ₀ = 25 σ_y² / (8π δ⁵)
//!
//! where `||·||` is the state norm of [`deviatoric_force_state_norm`]. When
//! the trial state violates it, every bond of the point is scaled by the
//! same factor `sqrt(2ψ₀) / ||t_d^trial||` (radial return), so the projected
//! state lies on the yield surface, and the plastic extension and plastic
//! multiplier are advanced:
//!
//! Δλ = (||t_d^trial|| / sqrt(2ψ₀) - 1) / α
//! e_dp^{n+1} = e_dp^n + Δλ t_d
//! λ^{n+1} = λ^n + Δλ
//!
//! Elastic steps copy the N state to Np1 unchanged.

use std::f64::consts::PI;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::bond::Bond;
use super::deviatoric::deviatoric_force_state_norm;
use super::{ConstitutiveModel, ForceInputs, OMEGA};
use crate::config::MaterialParameters;
use crate::error::Result;
use crate::geometry::Discretization;
use crate::state::{PlasticState, PlasticStep};

/// Elastic-perfectly-plastic peridynamic solid with von Mises-like yield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticPlastic {
    /// Bulk modulus K
    pub bulk_modulus: f64,
    /// Shear modulus μ
    pub shear_modulus: f64,
    /// Horizon δ
    pub horizon: f64,
    /// Uniaxial yield stress σ_y
    pub yield_stress: f64,
}

impl ElasticPlastic {
    pub fn from_parameters(params: &MaterialParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            bulk_modulus: params.bulk_modulus,
            shear_modulus: params.shear_modulus,
            horizon: params.horizon,
            yield_stress: params.yield_stress,
        })
    }

    /// Pointwise yield value ψ₀
    pub fn yield_value(&self) -> f64 {
        25.0 * self.yield_stress * self.yield_stress / (8.0 * PI * self.horizon.powi(5))
    }

    /// Radius of the yield surface, `sqrt(2ψ₀)`
    pub fn yield_norm(&self) -> f64 {
        (2.0 * self.yield_value()).sqrt()
    }

    /// Accumulate the internal force density into `force` and write the
    /// Np1 plastic state.
    ///
    /// Returns the number of owned points whose trial state exceeded yield.
    /// Points must have nonzero weighted volume.
    pub fn compute_internal_force(
        &self,
        disc: &Discretization,
        inputs: &ForceInputs,
        step: PlasticStep<'_>,
        force: &mut [DVec3],
    ) -> Result<usize> {
        inputs.validate(disc)?;
        disc.check_overlap("internal force", force.len())?;
        step.validate(disc)?;

        let PlasticStep {
            extension_n,
            extension_np1,
            lambda_n,
            lambda_np1,
        } = step;

        let reference = disc.reference();
        let volume = disc.volume();
        let owned = disc.owned();
        let list = disc.neighbors();
        let cfg = disc.configuration(inputs.current);
        let psi0 = self.yield_value();
        let yield_norm = self.yield_norm();

        let mut yielded = 0;
        for p in 0..disc.num_owned() {
            let slot = owned.slot(p);
            let self_volume = volume[slot];
            let m = inputs.weighted_volume[p];
            let theta = inputs.dilatation[p];
            let hood = disc.neighborhood(p, inputs.current, Some(inputs.damage));
            let bonds = list.bond_range(p);
            let edp_n = &extension_n[bonds.clone()];
            let edp_np1 = &mut extension_np1[bonds];

            let alpha = 15.0 * self.shear_modulus / m;
            let c = 3.0 * self.bulk_modulus * theta * OMEGA / m;

            let trial_norm = deviatoric_force_state_norm(&hood, &cfg, theta, Some(edp_n), alpha);
            let elastic = trial_norm * trial_norm / 2.0 - psi0 <= 0.0;
            let delta_lambda = if elastic {
                lambda_np1[p] = lambda_n[p];
                0.0
            } else {
                yielded += 1;
                let delta_lambda = (trial_norm / yield_norm - 1.0) / alpha;
                lambda_np1[p] = lambda_n[p] + delta_lambda;
                delta_lambda
            };

            for (n, &q) in hood.neighbors.iter().enumerate() {
                let bond = Bond::new(hood.x, hood.y, reference[q], inputs.current[q]);
                let td_trial = alpha * OMEGA * (bond.deviatoric_extension(theta) - edp_n[n]);
                let td = if elastic {
                    edp_np1[n] = edp_n[n];
                    td_trial
                } else {
                    let td = yield_norm * td_trial / trial_norm;
                    edp_np1[n] = edp_n[n] + td * delta_lambda;
                    td
                };

                let t = hood.intact(n) * (c * bond.zeta + td);
                let f = t * bond.direction();
                force[slot] += f * volume[q];
                force[q] -= f * self_volume;
            }
        }

        log::debug!("{} of {} owned points yielded", yielded, disc.num_owned());
        Ok(yielded)
    }
}

/// [`ElasticPlastic`] material together with its bond-level history.
#[derive(Debug, Clone)]
pub struct ElasticPlasticModel {
    pub material: ElasticPlastic,
    pub state: PlasticState,
    /// Points that yielded in the most recent evaluation
    pub last_yielded: usize,
}

impl ElasticPlasticModel {
    pub fn new(material: ElasticPlastic, disc: &Discretization) -> Self {
        Self {
            material,
            state: PlasticState::for_discretization(disc),
            last_yielded: 0,
        }
    }
}

impl ConstitutiveModel for ElasticPlasticModel {
    fn name(&self) -> &str {
        "isotropic elastic-plastic"
    }

    fn compute_force(
        &mut self,
        disc: &Discretization,
        inputs: &ForceInputs,
        force: &mut [DVec3],
    ) -> Result<()> {
        let step = self.state.step();
        self.last_yielded = self.material.compute_internal_force(disc, inputs, step, force)?;
        Ok(())
    }

    fn advance(&mut self) {
        self.state.advance();
    }
}
