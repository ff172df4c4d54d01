//! Material parameter set shared by the constitutive models.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PdError, Result};

/// Isotropic material constants and horizon.
///
/// Units are whatever the caller's model uses consistently; the defaults
/// describe a steel-like solid in MPa and mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialParameters {
    /// Bulk modulus K
    pub bulk_modulus: f64,
    /// Shear modulus μ
    pub shear_modulus: f64,
    /// Horizon δ
    pub horizon: f64,
    /// Uniaxial yield stress σ_y (elastic-plastic model only)
    pub yield_stress: f64,
}

impl MaterialParameters {
    /// `K` and Poisson's ratio `ν`; horizon and yield stress keep their
    /// defaults.
    pub fn from_bulk_and_poisson(bulk_modulus: f64, poisson_ratio: f64) -> Result<Self> {
        check_poisson(poisson_ratio)?;
        let shear_modulus =
            3.0 * bulk_modulus * (1.0 - 2.0 * poisson_ratio) / (2.0 * (1.0 + poisson_ratio));
        Ok(Self {
            bulk_modulus,
            shear_modulus,
            ..Self::default()
        })
    }

    /// Young's modulus `E` and Poisson's ratio `ν`
    pub fn from_youngs_and_poisson(youngs_modulus: f64, poisson_ratio: f64) -> Result<Self> {
        check_poisson(poisson_ratio)?;
        Ok(Self {
            bulk_modulus: youngs_modulus / (3.0 * (1.0 - 2.0 * poisson_ratio)),
            shear_modulus: youngs_modulus / (2.0 * (1.0 + poisson_ratio)),
            ..Self::default()
        })
    }

    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_yield_stress(mut self, yield_stress: f64) -> Self {
        self.yield_stress = yield_stress;
        self
    }

    /// ν = (3K - 2μ) / (2(3K + μ))
    pub fn poisson_ratio(&self) -> f64 {
        let k3 = 3.0 * self.bulk_modulus;
        (k3 - 2.0 * self.shear_modulus) / (2.0 * (k3 + self.shear_modulus))
    }

    /// E = 9Kμ / (3K + μ)
    pub fn youngs_modulus(&self) -> f64 {
        9.0 * self.bulk_modulus * self.shear_modulus / (3.0 * self.bulk_modulus + self.shear_modulus)
    }

    /// Every constant must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        check_positive("bulk_modulus", self.bulk_modulus)?;
        check_positive("shear_modulus", self.shear_modulus)?;
        check_positive("horizon", self.horizon)?;
        check_positive("yield_stress", self.yield_stress)
    }

    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded material parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse material parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Material parameters file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Load and validate, failing on a missing, malformed or invalid file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PdError::Config(format!("{}: {}", path.display(), e)))?;
        let params: Self = serde_json::from_str(&contents)
            .map_err(|e| PdError::Config(format!("{}: {}", path.display(), e)))?;
        params.validate()?;
        Ok(params)
    }
}

impl Default for MaterialParameters {
    fn default() -> Self {
        Self {
            bulk_modulus: 130_000.0,
            // ν = 0.25
            shear_modulus: 78_000.0,
            horizon: 0.3,
            yield_stress: 250.0,
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PdError::InvalidParameter { name, value })
    }
}

fn check_poisson(value: f64) -> Result<()> {
    if value > -1.0 && value < 0.5 {
        Ok(())
    } else {
        Err(PdError::InvalidParameter {
            name: "poisson_ratio",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = MaterialParameters::default();
        assert!(params.validate().is_ok());
        assert!((params.poisson_ratio() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_hooke_conversions_agree() {
        let from_k = MaterialParameters::from_bulk_and_poisson(100.0, 0.3).unwrap();
        let from_e =
            MaterialParameters::from_youngs_and_poisson(from_k.youngs_modulus(), 0.3).unwrap();
        assert!((from_e.bulk_modulus - 100.0).abs() < 1e-9);
        assert!((from_e.shear_modulus - from_k.shear_modulus).abs() < 1e-9);
        assert!((from_k.poisson_ratio() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_incompressible_poisson() {
        let err = MaterialParameters::from_bulk_and_poisson(1.0, 0.5).unwrap_err();
        assert!(matches!(err, PdError::InvalidParameter { name: "poisson_ratio", .. }));
    }

    #[test]
    fn test_validate_names_bad_field() {
        let params = MaterialParameters::default().with_horizon(0.0);
        assert_eq!(
            params.validate(),
            Err(PdError::InvalidParameter {
                name: "horizon",
                value: 0.0
            })
        );
        let params = MaterialParameters::default().with_yield_stress(f64::NAN);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_json_partial_fields_use_defaults() {
        let params: MaterialParameters = serde_json::from_str(r#"{"horizon": 0.5}"#).unwrap();
        assert_eq!(params.horizon, 0.5);
        assert_eq!(params.bulk_modulus, MaterialParameters::default().bulk_modulus);
    }

    #[test]
    fn test_serde_round_trip() {
        let params = MaterialParameters::from_youngs_and_poisson(200e3, 0.3)
            .unwrap()
            .with_yield_stress(350.0);
        let json = serde_json::to_string(&params).unwrap();
        let back: MaterialParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn test_missing_file() {
        let path = "does/not/exist/material.json";
        assert_eq!(MaterialParameters::load_or_default(path), MaterialParameters::default());
        assert!(matches!(
            MaterialParameters::from_json_file(path),
            Err(PdError::Config(_))
        ));
    }
}
