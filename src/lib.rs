//! Peridynamics Core - state-based peridynamic material kernels
//!
//! Weighted volume, dilatation, linear elastic and elastic-plastic internal
//! force, deviatoric force-state norm, shear calibration and geometry
//! update over a partitioned point cloud with bond damage.

pub mod config;
pub mod error;
pub mod geometry;
pub mod physics;
pub mod state;

pub use config::MaterialParameters;
pub use error::{PdError, Result};
pub use geometry::{
    as_points, as_points_mut, set_pure_shear, Configuration, Discretization, NeighborList,
    Neighborhood, OwnedPoints, PureShear,
};
pub use physics::{
    compute_dilatation, compute_shear_correction_factor, compute_weighted_volume,
    deviatoric_force_state_norm, dilatation_at, probe_shear_modulus_scale_factor,
    update_geometry, weighted_volume_at, ConstitutiveModel, ElasticPlastic, ElasticPlasticModel,
    ForceInputs, LinearElastic, PeridynamicSolver,
};
pub use state::{PlasticState, PlasticStep};
