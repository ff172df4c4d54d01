//! Isotropic linear elastic (linear peridynamic solid) force state.
//!
//! For the bond from owned point `p` to neighbor `q` the scalar force
//! state is
//!
//! t = (1 - d) [ ω θ_p (3K/m_p - α/3) |ξ| + (1 - d) ω α e ],  α = 15μ/m_p
//!
//! and the force vector `t M` (M the unit deformed bond direction) is
//! scattered pairwise: `+t M V_q` onto `p`, `-t M V_p` onto `q`. The bond
//! from `q` back to `p` is handled when `q` itself is an owned point, so the
//! total bond force involves both `θ_p` and `θ_q`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::bond::Bond;
use super::{ConstitutiveModel, ForceInputs, OMEGA};
use crate::config::MaterialParameters;
use crate::error::Result;
use crate::geometry::Discretization;

/// Linear elastic peridynamic solid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearElastic {
    /// Bulk modulus K
    pub bulk_modulus: f64,
    /// Shear modulus μ
    pub shear_modulus: f64,
}

impl LinearElastic {
    pub fn new(bulk_modulus: f64, shear_modulus: f64) -> Self {
        Self {
            bulk_modulus,
            shear_modulus,
        }
    }

    pub fn from_parameters(params: &MaterialParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self::new(params.bulk_modulus, params.shear_modulus))
    }

    /// Accumulate the internal force density into `force`.
    ///
    /// `force` has one entry per overlap point and is added to, never
    /// cleared, so several models can contribute to one field. Ghost entries
    /// receive the reaction of bonds from owned points.
    pub fn compute_internal_force(
        &self,
        disc: &Discretization,
        inputs: &ForceInputs,
        force: &mut [DVec3],
    ) -> Result<()> {
        inputs.validate(disc)?;
        disc.check_overlap("internal force", force.len())?;

        let reference = disc.reference();
        let volume = disc.volume();
        let owned = disc.owned();
        let list = disc.neighbors();

        for p in 0..disc.num_owned() {
            let slot = owned.slot(p);
            let x = reference[slot];
            let y = inputs.current[slot];
            let self_volume = volume[slot];
            let m = inputs.weighted_volume[p];

            let alpha = 15.0 * self.shear_modulus / m;
            let c1 = OMEGA * inputs.dilatation[p] * (3.0 * self.bulk_modulus / m - alpha / 3.0);

            let damage = &inputs.damage[list.bond_range(p)];
            for (&q, &d) in list.neighbors(p).iter().zip(damage) {
                let bond = Bond::new(x, y, reference[q], inputs.current[q]);
                let intact = 1.0 - d;
                let t = intact * (c1 * bond.zeta + intact * OMEGA * alpha * bond.extension());
                let f = t * bond.direction();
                force[slot] += f * volume[q];
                force[q] -= f * self_volume;
            }
        }
        Ok(())
    }
}

impl ConstitutiveModel for LinearElastic {
    fn name(&self) -> &str {
        "linear elastic"
    }

    fn compute_force(
        &mut self,
        disc: &Discretization,
        inputs: &ForceInputs,
        force: &mut [DVec3],
    ) -> Result<()> {
        self.compute_internal_force(disc, inputs, force)
    }
}
