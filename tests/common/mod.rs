//! Shared fixtures for the integration suites: a cell-centred lattice and a
//! brute-force horizon search standing in for a spatial neighbor search.

#![allow(dead_code)]

use glam::DVec3;
use peridynamics_core::NeighborList;

/// Route kernel logging through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cell-centred `nx × ny × nz` lattice filling a box of size `lengths`
/// centred at the origin. Returns positions and cell volumes.
pub fn lattice(counts: [usize; 3], lengths: DVec3) -> (Vec<DVec3>, Vec<f64>) {
    let spacing = lengths / DVec3::new(counts[0] as f64, counts[1] as f64, counts[2] as f64);
    let mut points = Vec::with_capacity(counts[0] * counts[1] * counts[2]);
    for k in 0..counts[2] {
        for j in 0..counts[1] {
            for i in 0..counts[0] {
                let cell = DVec3::new(i as f64 + 0.5, j as f64 + 0.5, k as f64 + 0.5);
                points.push(cell * spacing - 0.5 * lengths);
            }
        }
    }
    let volume = vec![spacing.x * spacing.y * spacing.z; points.len()];
    (points, volume)
}

/// Unit cube split into `n³` cells
pub fn cube(n: usize) -> (Vec<DVec3>, Vec<f64>) {
    lattice([n, n, n], DVec3::ONE)
}

/// Neighbors within `horizon` (inclusive) of each point in `owned`,
/// searched over all of `points`.
pub fn neighbor_list(points: &[DVec3], owned: &[usize], horizon: f64) -> NeighborList {
    let hoods: Vec<Vec<usize>> = owned
        .iter()
        .map(|&i| {
            (0..points.len())
                .filter(|&j| j != i && points[j].distance(points[i]) <= horizon)
                .collect()
        })
        .collect();
    NeighborList::from_neighborhoods(hoods)
}

/// Neighbor list with every point owned, in overlap order.
pub fn full_neighbor_list(points: &[DVec3], horizon: f64) -> NeighborList {
    let owned: Vec<usize> = (0..points.len()).collect();
    neighbor_list(points, &owned, horizon)
}

/// Homogeneous deformation `Y = F X`, columns of `F` given as vectors.
pub fn deform(points: &[DVec3], f: glam::DMat3) -> Vec<DVec3> {
    points.iter().map(|&x| f * x).collect()
}

/// Global simple shear `Y = X + γ (X.y, 0, 0)`
pub fn simple_shear_xy(points: &[DVec3], gamma: f64) -> Vec<DVec3> {
    points
        .iter()
        .map(|&x| x + DVec3::new(gamma * x.y, 0.0, 0.0))
        .collect()
}

/// Entry-wise closeness with a relative and an absolute floor.
pub fn assert_close(actual: f64, expected: f64, rel: f64, abs: f64) {
    let tol = rel * actual.abs().max(expected.abs()) + abs;
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}
