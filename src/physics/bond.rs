//! Reference and deformed geometry of a single bond.

use glam::DVec3;

/// Kinematics of the bond from a point to one neighbor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bond {
    /// Reference length `|ξ|`
    pub zeta: f64,
    /// Deformed bond vector `Y_q - Y_p`
    pub deformed: DVec3,
    /// Deformed length `|Y_q - Y_p|`
    pub length: f64,
}

impl Bond {
    #[inline]
    pub fn new(x: DVec3, y: DVec3, xq: DVec3, yq: DVec3) -> Self {
        let deformed = yq - y;
        Self {
            zeta: (xq - x).length(),
            deformed,
            length: deformed.length(),
        }
    }

    /// Scalar extension `e = |Y_q - Y_p| - |ξ|`
    #[inline]
    pub fn extension(&self) -> f64 {
        self.length - self.zeta
    }

    /// Deviatoric extension `e - θ|ξ|/3`
    #[inline]
    pub fn deviatoric_extension(&self, theta: f64) -> f64 {
        self.extension() - theta * self.zeta / 3.0
    }

    /// Unit vector along the deformed bond
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.deformed / self.length
    }
}
