//! Validated reference configuration of one partition.

use glam::DVec3;

use super::{NeighborList, Neighborhood, OwnedPoints};
use crate::error::{check_len, PdError, Result};

/// Overlap arrays seen by the single-point operations.
#[derive(Debug, Clone, Copy)]
pub struct Configuration<'a> {
    /// Reference positions `X`
    pub reference: &'a [DVec3],
    /// Current positions `Y`
    pub current: &'a [DVec3],
    /// Point volumes
    pub volume: &'a [f64],
}

/// Reference positions, volumes, neighbor list and owned-point mapping.
///
/// All structural preconditions are checked once in [`Discretization::new`]:
/// array lengths agree, every neighbor index and owned slot lies inside the
/// overlap, and no point lists itself as a neighbor. Symmetry of the
/// neighbor sets is not required.
#[derive(Debug, Clone, Copy)]
pub struct Discretization<'a> {
    reference: &'a [DVec3],
    volume: &'a [f64],
    neighbors: &'a NeighborList,
    owned: OwnedPoints<'a>,
}

impl<'a> Discretization<'a> {
    pub fn new(
        reference: &'a [DVec3],
        volume: &'a [f64],
        neighbors: &'a NeighborList,
        owned: OwnedPoints<'a>,
    ) -> Result<Self> {
        check_len("volume", reference.len(), volume.len())?;
        check_len("owned points", neighbors.num_points(), owned.len())?;

        let len = reference.len();
        for p in 0..owned.len() {
            let slot = owned.slot(p);
            if slot >= len {
                return Err(PdError::OwnedIdOutOfRange { owned: p, slot, len });
            }
            for &q in neighbors.neighbors(p) {
                if q >= len {
                    return Err(PdError::NeighborOutOfRange {
                        point: p,
                        neighbor: q,
                        len,
                    });
                }
                if q == slot {
                    return Err(PdError::SelfNeighbor { point: p });
                }
            }
        }

        log::info!(
            "Discretization: {} owned points, {} overlap points, {} bonds",
            owned.len(),
            len,
            neighbors.num_bonds()
        );

        Ok(Self {
            reference,
            volume,
            neighbors,
            owned,
        })
    }

    /// Owned points are the first `neighbors.num_points()` overlap entries.
    pub fn contiguous(
        reference: &'a [DVec3],
        volume: &'a [f64],
        neighbors: &'a NeighborList,
    ) -> Result<Self> {
        Self::new(
            reference,
            volume,
            neighbors,
            OwnedPoints::Prefix(neighbors.num_points()),
        )
    }

    pub fn reference(&self) -> &'a [DVec3] {
        self.reference
    }

    pub fn volume(&self) -> &'a [f64] {
        self.volume
    }

    pub fn neighbors(&self) -> &'a NeighborList {
        self.neighbors
    }

    pub fn owned(&self) -> OwnedPoints<'a> {
        self.owned
    }

    pub fn num_owned(&self) -> usize {
        self.owned.len()
    }

    pub fn overlap_len(&self) -> usize {
        self.reference.len()
    }

    pub fn num_bonds(&self) -> usize {
        self.neighbors.num_bonds()
    }

    /// Overlap arrays with `current` as the deformed configuration
    pub fn configuration(&self, current: &'a [DVec3]) -> Configuration<'a> {
        Configuration {
            reference: self.reference,
            current,
            volume: self.volume,
        }
    }

    /// Single-point view of the `p`-th owned point.
    ///
    /// `damage` is the full bond-ordered damage array; the view keeps only
    /// this point's bonds.
    pub fn neighborhood(
        &self,
        p: usize,
        current: &[DVec3],
        damage: Option<&'a [f64]>,
    ) -> Neighborhood<'a> {
        let slot = self.owned.slot(p);
        let bonds = self.neighbors.bond_range(p);
        Neighborhood {
            x: self.reference[slot],
            y: current[slot],
            neighbors: self.neighbors.neighbors(p),
            damage: damage.map(|d| &d[bonds]),
        }
    }

    pub(crate) fn check_overlap(&self, what: &'static str, len: usize) -> Result<()> {
        check_len(what, self.overlap_len(), len)
    }

    pub(crate) fn check_owned(&self, what: &'static str, len: usize) -> Result<()> {
        check_len(what, self.num_owned(), len)
    }

    pub(crate) fn check_bonds(&self, what: &'static str, len: usize) -> Result<()> {
        check_len(what, self.num_bonds(), len)
    }
}
