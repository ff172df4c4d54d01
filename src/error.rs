//! Typed precondition and configuration errors.
//!
//! Kernels never signal numeric degeneracy (a zero weighted volume, a
//! non-finite dilatation) as an error: those propagate as IEEE values. The
//! variants here cover inputs that are structurally wrong, such as arrays
//! whose lengths disagree with the neighbor list.

/// Errors raised while validating kernel inputs or loading parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PdError {
    #[error("length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("malformed neighbor list at point {point}: {reason}")]
    MalformedNeighborList { point: usize, reason: String },

    #[error("point {point} lists neighbor {neighbor}, outside overlap of length {len}")]
    NeighborOutOfRange {
        point: usize,
        neighbor: usize,
        len: usize,
    },

    #[error("point {point} lists itself as a neighbor")]
    SelfNeighbor { point: usize },

    #[error("owned point {owned} maps to slot {slot}, outside overlap of length {len}")]
    OwnedIdOutOfRange { owned: usize, slot: usize, len: usize },

    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PdError>;

/// Fails with [`PdError::LengthMismatch`] unless `actual == expected`.
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PdError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}
