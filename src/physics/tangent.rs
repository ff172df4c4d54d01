//! Analytic self-stiffness of the linear elastic force.
//!
//! For each overlap point `i` this accumulates the 3×3 block `∂f_i/∂y_i` of
//! the internal force density with respect to the point's own current
//! position. Two kinds of bond touch `i`:
//!
//! - its own bonds `i → q`, where `t` varies with `y_i` through the bond
//!   length, the bond direction and `θ_i`;
//! - reverse bonds `p → i` of every owned `p` listing `i`, where `t` varies
//!   through the bond and through `θ_p`.
//!
//! Off-diagonal blocks (and so full matrix assembly) are left to the
//! consumer of the per-bond data.

use glam::{DMat3, DVec3};

use super::bond::Bond;
use super::elastic::LinearElastic;
use super::{ForceInputs, OMEGA};
use crate::error::Result;
use crate::geometry::Discretization;

/// `a ⊗ b`, i.e. the matrix with entries `a_r b_c`
#[inline]
fn outer(a: DVec3, b: DVec3) -> DMat3 {
    DMat3::from_cols(a * b.x, a * b.y, a * b.z)
}

impl LinearElastic {
    /// Accumulate `∂f_i/∂y_i` into `blocks` (one per overlap point).
    ///
    /// Blocks of ghost points only receive reverse-bond terms; they are
    /// complete once the owning partition's contributions are summed in.
    pub fn accumulate_self_stiffness(
        &self,
        disc: &Discretization,
        inputs: &ForceInputs,
        blocks: &mut [DMat3],
    ) -> Result<()> {
        inputs.validate(disc)?;
        disc.check_overlap("stiffness blocks", blocks.len())?;

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
            let neighbors = list.neighbors(p);
            let damage = &inputs.damage[list.bond_range(p)];

            let alpha = 15.0 * self.shear_modulus / m;
            let k = OMEGA * (3.0 * self.bulk_modulus / m - alpha / 3.0);
            let c1 = inputs.dilatation[p] * k;

            // ∂θ_p/∂y_p
            let mut grad_theta = DVec3::ZERO;
            for (&q, &d) in neighbors.iter().zip(damage) {
                let bond = Bond::new(x, y, reference[q], inputs.current[q]);
                grad_theta -= (3.0 * OMEGA / m) * (1.0 - d) * bond.zeta * volume[q] * bond.direction();
            }

            for (&q, &d) in neighbors.iter().zip(damage) {
                let bond = Bond::new(x, y, reference[q], inputs.current[q]);
                let intact = 1.0 - d;
                let dir = bond.direction();
                let t = intact * (c1 * bond.zeta + intact * OMEGA * alpha * bond.extension());
                let rotation = (DMat3::IDENTITY - outer(dir, dir)) * (t / bond.length);

                let dt_own = intact * (k * bond.zeta * grad_theta - intact * OMEGA * alpha * dir);
                blocks[slot] += (outer(dir, dt_own) - rotation) * volume[q];

                let dtheta_neighbor = (3.0 * OMEGA / m) * intact * bond.zeta * volume[q];
                let dt_neighbor =
                    intact * (k * bond.zeta * dtheta_neighbor + intact * OMEGA * alpha) * dir;
                blocks[q] -= (outer(dir, dt_neighbor) + rotation) * self_volume;
            }
        }
        Ok(())
    }
}
