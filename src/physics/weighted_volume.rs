//! Weighted volume `m`, the reference-configuration normalization of a
//! point's neighborhood:
//!
//! m = Σ_q ω(|ξ|) |ξ|² V_q
//!
//! It depends only on reference positions, volumes and topology, so it is
//! computed once at setup.

use glam::DVec3;

use super::OMEGA;
use crate::error::Result;
use crate::geometry::Discretization;

/// Weighted volume of the point at `x`.
///
/// A point with no neighbors yields `0.0`; downstream kernels divide by `m`
/// and must not be handed such a point.
pub fn weighted_volume_at(x: DVec3, neighbors: &[usize], reference: &[DVec3], volume: &[f64]) -> f64 {
    let mut m = 0.0;
    for &q in neighbors {
        let zeta_squared = (reference[q] - x).length_squared();
        m += OMEGA * zeta_squared * volume[q];
    }
    m
}

/// Weighted volume of every owned point, written to `m` (one entry per
/// owned point).
pub fn compute_weighted_volume(disc: &Discretization, m: &mut [f64]) -> Result<()> {
    disc.check_owned("weighted volume", m.len())?;

    let reference = disc.reference();
    let owned = disc.owned();
    let mut isolated = 0;
    for (p, m_p) in m.iter_mut().enumerate() {
        let x = reference[owned.slot(p)];
        *m_p = weighted_volume_at(x, disc.neighbors().neighbors(p), reference, disc.volume());
        if *m_p == 0.0 {
            isolated += 1;
        }
    }

    if isolated > 0 {
        log::warn!("{} owned points have zero weighted volume", isolated);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::NeighborList;

    #[test]
    fn test_two_neighbors() {
        let reference = vec![
            DVec3::ZERO,
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
        ];
        let volume = vec![1.0, 0.5, 0.25];
        let m = weighted_volume_at(reference[0], &[1, 2], &reference, &volume);
        // 1² * 0.5 + 2² * 0.25
        assert_eq!(m, 1.5);
    }

    #[test]
    fn test_isolated_point_is_zero() {
        let reference = vec![DVec3::ZERO, DVec3::X];
        let volume = vec![1.0, 1.0];
        let list = NeighborList::from_neighborhoods([vec![], vec![0]]);
        let disc = Discretization::contiguous(&reference, &volume, &list).unwrap();
        let mut m = vec![-1.0; 2];
        compute_weighted_volume(&disc, &mut m).unwrap();
        assert_eq!(m, vec![0.0, 1.0]);
    }

    #[test]
    fn test_output_length_checked() {
        let reference = vec![DVec3::ZERO, DVec3::X];
        let volume = vec![1.0, 1.0];
        let list = NeighborList::from_neighborhoods([vec![1], vec![0]]);
        let disc = Discretization::contiguous(&reference, &volume, &list).unwrap();
        let mut m = vec![0.0; 3];
        assert!(compute_weighted_volume(&disc, &mut m).is_err());
    }
}
