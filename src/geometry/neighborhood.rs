//! Flat neighbor-list storage and owned-point index mapping.
//!
//! The neighbor list arrives point-major as one buffer,
//! `[count, idx_0, .., idx_{count-1}, count, ...]`, with indices into the
//! overlap arrays. It is kept in that encoding and indexed through an offset
//! table so no per-point containers are allocated.

use std::ops::Range;

use glam::DVec3;

use crate::error::{PdError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    /// Offset of the first neighbor index in the encoded buffer
    start: usize,
    /// Neighbor count
    len: usize,
    /// Offset of this point's first bond in bond-ordered arrays
    bond_start: usize,
}

/// Neighbor list for the owned points of one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborList {
    encoded: Vec<usize>,
    segments: Vec<Segment>,
    num_bonds: usize,
}

impl NeighborList {
    /// Parse the flat `[count, indices...]` encoding for `num_points` points.
    ///
    /// The buffer must contain exactly `num_points` segments.
    pub fn from_encoded(encoded: Vec<usize>, num_points: usize) -> Result<Self> {
        let mut segments = Vec::with_capacity(num_points);
        let mut cursor = 0;
        let mut bond_start = 0;

        for point in 0..num_points {
            let Some(&count) = encoded.get(cursor) else {
                return Err(PdError::MalformedNeighborList {
                    point,
                    reason: "buffer ends before the neighbor count".into(),
                });
            };
            let start = cursor + 1;
            let remaining = encoded.len() - start;
            if count > remaining {
                return Err(PdError::MalformedNeighborList {
                    point,
                    reason: format!("declares {count} neighbors but only {remaining} entries remain"),
                });
            }
            segments.push(Segment {
                start,
                len: count,
                bond_start,
            });
            bond_start += count;
            cursor = start + count;
        }

        if cursor != encoded.len() {
            return Err(PdError::MalformedNeighborList {
                point: num_points,
                reason: format!(
                    "{} trailing entries after the last segment",
                    encoded.len() - cursor
                ),
            });
        }

        Ok(Self {
            encoded,
            segments,
            num_bonds: bond_start,
        })
    }

    /// Build the encoding from per-point neighbor sequences.
    pub fn from_neighborhoods<I, N>(neighborhoods: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: AsRef<[usize]>,
    {
        let mut encoded = Vec::new();
        let mut segments = Vec::new();
        let mut bond_start = 0;

        for hood in neighborhoods {
            let hood = hood.as_ref();
            encoded.push(hood.len());
            segments.push(Segment {
                start: encoded.len(),
                len: hood.len(),
                bond_start,
            });
            encoded.extend_from_slice(hood);
            bond_start += hood.len();
        }

        Self {
            encoded,
            segments,
            num_bonds: bond_start,
        }
    }

    /// Number of points (segments) in the list
    pub fn num_points(&self) -> usize {
        self.segments.len()
    }

    /// Total number of bonds, i.e. the length of bond-ordered arrays
    pub fn num_bonds(&self) -> usize {
        self.num_bonds
    }

    /// Neighbor overlap indices of the `p`-th point
    #[inline]
    pub fn neighbors(&self, p: usize) -> &[usize] {
        let seg = self.segments[p];
        &self.encoded[seg.start..seg.start + seg.len]
    }

    /// Range of the `p`-th point's bonds in bond-ordered arrays
    #[inline]
    pub fn bond_range(&self, p: usize) -> Range<usize> {
        let seg = self.segments[p];
        seg.bond_start..seg.bond_start + seg.len
    }

    /// The flat encoding, as it would be handed to another consumer
    pub fn encoded(&self) -> &[usize] {
        &self.encoded
    }

    /// Iterate `(neighbors, bond_range)` per point
    pub fn iter(&self) -> impl Iterator<Item = (&[usize], Range<usize>)> + '_ {
        (0..self.num_points()).map(move |p| (self.neighbors(p), self.bond_range(p)))
    }
}

/// Maps owned-point sequence numbers to overlap slots.
///
/// `Prefix(n)` means the owned points are the first `n` overlap entries;
/// `Ids` gives the slot of every owned point explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedPoints<'a> {
    Prefix(usize),
    Ids(&'a [usize]),
}

impl<'a> OwnedPoints<'a> {
    pub fn len(&self) -> usize {
        match self {
            Self::Prefix(n) => *n,
            Self::Ids(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlap slot of the `p`-th owned point
    #[inline]
    pub fn slot(&self, p: usize) -> usize {
        match self {
            Self::Prefix(_) => p,
            Self::Ids(ids) => ids[p],
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).map(move |p| self.slot(p))
    }
}

/// Single-point view used by the probe operations.
///
/// `damage`, when present, holds one value per entry of `neighbors`;
/// `None` means every bond is pristine.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<'a> {
    /// Reference position of the point
    pub x: DVec3,
    /// Current position of the point
    pub y: DVec3,
    /// Overlap indices of the neighbors
    pub neighbors: &'a [usize],
    /// Bond damage aligned with `neighbors`
    pub damage: Option<&'a [f64]>,
}

impl<'a> Neighborhood<'a> {
    pub fn new(x: DVec3, y: DVec3, neighbors: &'a [usize]) -> Self {
        Self {
            x,
            y,
            neighbors,
            damage: None,
        }
    }

    pub fn with_damage(mut self, damage: &'a [f64]) -> Self {
        self.damage = Some(damage);
        self
    }

    /// `1 - damage` of the `n`-th bond
    #[inline]
    pub(crate) fn intact(&self, n: usize) -> f64 {
        match self.damage {
            Some(d) => 1.0 - d[n],
            None => 1.0,
        }
    }
}
