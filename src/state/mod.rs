//! History state carried between time steps.
//!
//! Material models with path dependence keep their variables at two time
//! levels: `N` (last accepted step, read-only during evaluation) and `Np1`
//! (written by the kernel). Accepting a step copies `Np1` over `N`.

mod plastic;

pub use plastic::{PlasticState, PlasticStep};
