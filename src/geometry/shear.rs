//! Synthetic simple-shear deformation of one neighborhood.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Plane of a simple-shear state.
///
/// `XY` displaces along x in proportion to the y offset, `XZ` along x in
/// proportion to z, `YZ` along y in proportion to z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PureShear {
    XY,
    XZ,
    YZ,
}

impl PureShear {
    pub const ALL: [PureShear; 3] = [PureShear::XY, PureShear::XZ, PureShear::YZ];

    /// Displacement of a neighbor at reference offset `xi` from the center
    #[inline]
    pub fn displacement(self, xi: DVec3, gamma: f64) -> DVec3 {
        match self {
            Self::XY => DVec3::new(gamma * xi.y, 0.0, 0.0),
            Self::XZ => DVec3::new(gamma * xi.z, 0.0, 0.0),
            Self::YZ => DVec3::new(0.0, gamma * xi.z, 0.0),
        }
    }
}

/// Overwrite the current position of every neighbor of the point at `x` so
/// that the neighborhood is in simple shear of magnitude `gamma`.
///
/// Only neighbor entries of `current` are written; the center point's own
/// entry is left alone and the shear is measured relative to `x`.
///
/// # Panics
/// If a neighbor index is outside `reference` or `current`.
pub fn set_pure_shear(
    x: DVec3,
    neighbors: &[usize],
    reference: &[DVec3],
    current: &mut [DVec3],
    mode: PureShear,
    gamma: f64,
) {
    for &q in neighbors {
        let xq = reference[q];
        current[q] = xq + mode.displacement(xq - x, gamma);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_modes() {
        let xi = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(PureShear::XY.displacement(xi, 0.5), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(PureShear::XZ.displacement(xi, 0.5), DVec3::new(1.5, 0.0, 0.0));
        assert_eq!(PureShear::YZ.displacement(xi, 0.5), DVec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_set_pure_shear_leaves_center_untouched() {
        let reference = vec![
            DVec3::ZERO,
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
        ];
        let mut current = vec![DVec3::splat(9.0); 3];
        set_pure_shear(reference[0], &[1, 2], &reference, &mut current, PureShear::XY, 0.1);

        assert_eq!(current[0], DVec3::splat(9.0));
        assert_eq!(current[1], DVec3::new(0.1, 1.0, 0.0));
        assert_eq!(current[2], DVec3::new(0.0, 0.0, 1.0));
    }
}
