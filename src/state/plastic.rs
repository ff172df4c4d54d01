//! Two-time-level history of the elastic-plastic model.

use crate::error::Result;
use crate::geometry::Discretization;

/// Deviatoric plastic extension (per bond) and plastic multiplier (per
/// owned point) at the start (`N`) and end (`Np1`) of a step.
#[derive(Debug, Clone, PartialEq)]
pub struct PlasticState {
    extension_n: Vec<f64>,
    extension_np1: Vec<f64>,
    lambda_n: Vec<f64>,
    lambda_np1: Vec<f64>,
}

impl PlasticState {
    /// Virgin material: no plastic extension, zero multiplier
    pub fn new(num_bonds: usize, num_owned: usize) -> Self {
        Self {
            extension_n: vec![0.0; num_bonds],
            extension_np1: vec![0.0; num_bonds],
            lambda_n: vec![0.0; num_owned],
            lambda_np1: vec![0.0; num_owned],
        }
    }

    pub fn for_discretization(disc: &Discretization) -> Self {
        Self::new(disc.num_bonds(), disc.num_owned())
    }

    /// Borrow N for reading and Np1 for writing
    pub fn step(&mut self) -> PlasticStep<'_> {
        PlasticStep {
            extension_n: &self.extension_n,
            extension_np1: &mut self.extension_np1,
            lambda_n: &self.lambda_n,
            lambda_np1: &mut self.lambda_np1,
        }
    }

    /// Accept the step: Np1 becomes the new N.
    pub fn advance(&mut self) {
        self.extension_n.copy_from_slice(&self.extension_np1);
        self.lambda_n.copy_from_slice(&self.lambda_np1);
    }

    pub fn plastic_extension(&self) -> &[f64] {
        &self.extension_n
    }

    pub fn plastic_extension_np1(&self) -> &[f64] {
        &self.extension_np1
    }

    pub fn lambda(&self) -> &[f64] {
        &self.lambda_n
    }

    pub fn lambda_np1(&self) -> &[f64] {
        &self.lambda_np1
    }
}

/// Borrowed N/Np1 arrays for one evaluation of the elastic-plastic kernel.
#[derive(Debug)]
pub struct PlasticStep<'a> {
    /// Deviatoric plastic extension at N, one per bond
    pub extension_n: &'a [f64],
    /// Deviatoric plastic extension at Np1, one per bond
    pub extension_np1: &'a mut [f64],
    /// Plastic multiplier at N, one per owned point
    pub lambda_n: &'a [f64],
    /// Plastic multiplier at Np1, one per owned point
    pub lambda_np1: &'a mut [f64],
}

impl PlasticStep<'_> {
    pub(crate) fn validate(&self, disc: &Discretization) -> Result<()> {
        disc.check_bonds("plastic extension (N)", self.extension_n.len())?;
        disc.check_bonds("plastic extension (Np1)", self.extension_np1.len())?;
        disc.check_owned("plastic multiplier (N)", self.lambda_n.len())?;
        disc.check_owned("plastic multiplier (Np1)", self.lambda_np1.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_virgin() {
        let state = PlasticState::new(5, 2);
        assert_eq!(state.plastic_extension(), &[0.0; 5]);
        assert_eq!(state.lambda(), &[0.0; 2]);
    }

    #[test]
    fn test_advance_commits_np1() {
        let mut state = PlasticState::new(3, 1);
        {
            let step = state.step();
            step.extension_np1.copy_from_slice(&[0.1, -0.2, 0.3]);
            step.lambda_np1[0] = 0.5;
        }
        assert_eq!(state.plastic_extension(), &[0.0; 3]);

        state.advance();
        assert_eq!(state.plastic_extension(), &[0.1, -0.2, 0.3]);
        assert_eq!(state.lambda(), &[0.5]);
        assert_eq!(state.plastic_extension_np1(), state.plastic_extension());
        assert_eq!(state.lambda_np1(), state.lambda());
    }
}
