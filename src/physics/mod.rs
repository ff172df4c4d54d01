//! State-based peridynamics constitutive kernels.
//!
//! This module implements:
//! - Weighted volume `m` (reference configuration, computed once)
//! - Dilatation `θ` (every force evaluation)
//! - Linear elastic and isotropic elastic-plastic force states
//! - Deviatoric force-state norm, shear probes and shear correction factors
//! - Analytic self-stiffness of the linear elastic force
//! - Geometry update for Velocity-Verlet stepping
//!
//! One evaluation pass flows geometry → weighted volume → dilatation →
//! internal force, with bond damage read at every stage.
//!
//! References:
//! - Silling et al., "Peridynamic states and constitutive modeling", J Elasticity 2007
//! - Mitchell, "A nonlocal, ordinary, state-based plasticity model for peridynamics", SAND2011-3166

mod bond;
pub mod calibration;
pub mod deviatoric;
pub mod dilatation;
pub mod elastic;
pub mod integrator;
pub mod plastic;
pub mod tangent;
pub mod weighted_volume;

pub use calibration::{
    compute_shear_correction_factor, continuum_shear_norm_squared,
    probe_shear_modulus_scale_factor, SHEAR_PROBE_GAMMA,
};
pub use deviatoric::deviatoric_force_state_norm;
pub use dilatation::{compute_dilatation, dilatation_at};
pub use elastic::LinearElastic;
pub use integrator::update_geometry;
pub use plastic::{ElasticPlastic, ElasticPlasticModel};
pub use weighted_volume::{compute_weighted_volume, weighted_volume_at};

use glam::DVec3;

use crate::error::Result;
use crate::geometry::Discretization;

/// Influence function ω(|ξ|). Uniform weighting; the yield constant and the
/// continuum shear norm are derived for this choice.
pub const OMEGA: f64 = 1.0;

/// Per-pass arrays read by the force kernels.
#[derive(Debug, Clone, Copy)]
pub struct ForceInputs<'a> {
    /// Current positions, one per overlap point
    pub current: &'a [DVec3],
    /// Weighted volume, one per owned point
    pub weighted_volume: &'a [f64],
    /// Dilatation, one per owned point
    pub dilatation: &'a [f64],
    /// Bond damage in neighbor-list order
    pub damage: &'a [f64],
}

impl ForceInputs<'_> {
    pub(crate) fn validate(&self, disc: &Discretization) -> Result<()> {
        disc.check_overlap("current positions", self.current.len())?;
        disc.check_owned("weighted volume", self.weighted_volume.len())?;
        disc.check_owned("dilatation", self.dilatation.len())?;
        disc.check_bonds("bond damage", self.damage.len())
    }
}

/// A material model contributing to the internal force field.
pub trait ConstitutiveModel {
    fn name(&self) -> &str;

    /// Add this model's force density to `force` (never cleared here).
    fn compute_force(
        &mut self,
        disc: &Discretization,
        inputs: &ForceInputs,
        force: &mut [DVec3],
    ) -> Result<()>;

    /// Commit history state after a converged step.
    fn advance(&mut self) {}
}

/// Runs the dilatation and force passes for a set of material models
/// sharing one discretization.
pub struct PeridynamicSolver {
    models: Vec<Box<dyn ConstitutiveModel>>,
    weighted_volume: Vec<f64>,
    dilatation: Vec<f64>,
}

impl PeridynamicSolver {
    /// Create a solver and compute the weighted volume of every owned point
    pub fn new(disc: &Discretization) -> Result<Self> {
        let mut weighted_volume = vec![0.0; disc.num_owned()];
        compute_weighted_volume(disc, &mut weighted_volume)?;
        Ok(Self {
            models: Vec::new(),
            weighted_volume,
            dilatation: vec![0.0; disc.num_owned()],
        })
    }

    pub fn add_model(&mut self, model: Box<dyn ConstitutiveModel>) {
        log::info!("Adding constitutive model: {}", model.name());
        self.models.push(model);
    }

    pub fn weighted_volume(&self) -> &[f64] {
        &self.weighted_volume
    }

    /// Dilatation from the most recent evaluation
    pub fn dilatation(&self) -> &[f64] {
        &self.dilatation
    }

    /// Zero `force`, recompute the dilatation and let every model add its
    /// contribution.
    pub fn compute_internal_force(
        &mut self,
        disc: &Discretization,
        current: &[DVec3],
        damage: &[f64],
        force: &mut [DVec3],
    ) -> Result<()> {
        disc.check_overlap("internal force", force.len())?;
        force.fill(DVec3::ZERO);

        compute_dilatation(disc, current, &self.weighted_volume, damage, &mut self.dilatation)?;

        let inputs = ForceInputs {
            current,
            weighted_volume: &self.weighted_volume,
            dilatation: &self.dilatation,
            damage,
        };
        for model in &mut self.models {
            model.compute_force(disc, &inputs, force)?;
        }
        Ok(())
    }

    /// Commit the history of every model
    pub fn advance(&mut self) {
        for model in &mut self.models {
            model.advance();
        }
    }
}
