//! Configuration module for loading material parameters.

mod parameters;

pub use parameters::MaterialParameters;
