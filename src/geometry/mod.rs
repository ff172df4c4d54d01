//! Point-cloud geometry: neighbor lists, owned-point mapping, validated
//! discretizations and synthetic shear states.
//!
//! Positions are handled as `&[DVec3]`. Callers holding the flat
//! interleaved `x0 y0 z0 x1 ...` buffers can view them without copying
//! through [`as_points`] and [`as_points_mut`].

mod discretization;
mod neighborhood;
mod shear;

pub use discretization::{Configuration, Discretization};
pub use neighborhood::{NeighborList, Neighborhood, OwnedPoints};
pub use shear::{set_pure_shear, PureShear};

use glam::DVec3;

use crate::error::{PdError, Result};

fn flat_mismatch(len: usize) -> PdError {
    PdError::LengthMismatch {
        what: "flat xyz buffer",
        expected: len - len % 3,
        actual: len,
    }
}

/// View a flat `[x, y, z, x, y, z, ...]` buffer as points.
pub fn as_points(flat: &[f64]) -> Result<&[DVec3]> {
    bytemuck::try_cast_slice(flat).map_err(|_| flat_mismatch(flat.len()))
}

/// Mutable variant of [`as_points`].
pub fn as_points_mut(flat: &mut [f64]) -> Result<&mut [DVec3]> {
    let len = flat.len();
    bytemuck::try_cast_slice_mut(flat).map_err(|_| flat_mismatch(len))
}
