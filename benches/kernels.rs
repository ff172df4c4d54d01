//! Kernel benchmarks on a cubic lattice

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec3;

use peridynamics_core::{
    compute_dilatation, compute_shear_correction_factor, compute_weighted_volume, Discretization,
    ElasticPlastic, ForceInputs, LinearElastic, PlasticState,
};

#[path = "../tests/common/mod.rs"]
mod common;

const CELLS: usize = 12;

fn horizon() -> f64 {
    3.015 / CELLS as f64
}

fn bench_weighted_volume(c: &mut Criterion) {
    let (x, v) = common::cube(CELLS);
    let list = common::full_neighbor_list(&x, horizon());
    let disc = Discretization::contiguous(&x, &v, &list).unwrap();
    let mut m = vec![0.0; disc.num_owned()];

    c.bench_function("weighted_volume", |b| {
        b.iter(|| compute_weighted_volume(black_box(&disc), &mut m).unwrap())
    });
}

fn bench_dilatation(c: &mut Criterion) {
    let (x, v) = common::cube(CELLS);
    let list = common::full_neighbor_list(&x, horizon());
    let disc = Discretization::contiguous(&x, &v, &list).unwrap();
    let current = common::simple_shear_xy(&x, 1e-3);
    let damage = vec![0.0; disc.num_bonds()];
    let mut m = vec![0.0; disc.num_owned()];
    compute_weighted_volume(&disc, &mut m).unwrap();
    let mut theta = vec![0.0; disc.num_owned()];

    c.bench_function("dilatation", |b| {
        b.iter(|| {
            compute_dilatation(&disc, black_box(&current), &m, &damage, &mut theta).unwrap()
        })
    });
}

fn bench_internal_force(c: &mut Criterion) {
    let (x, v) = common::cube(CELLS);
    let list = common::full_neighbor_list(&x, horizon());
    let disc = Discretization::contiguous(&x, &v, &list).unwrap();
    let current = common::simple_shear_xy(&x, 1e-3);
    let damage = vec![0.0; disc.num_bonds()];
    let mut m = vec![0.0; disc.num_owned()];
    compute_weighted_volume(&disc, &mut m).unwrap();
    let mut theta = vec![0.0; disc.num_owned()];
    compute_dilatation(&disc, &current, &m, &damage, &mut theta).unwrap();
    let inputs = ForceInputs {
        current: &current,
        weighted_volume: &m,
        dilatation: &theta,
        damage: &damage,
    };
    let mut force = vec![DVec3::ZERO; x.len()];

    let elastic = LinearElastic::new(130_000.0, 78_000.0);
    c.bench_function("linear_elastic_force", |b| {
        b.iter(|| {
            force.fill(DVec3::ZERO);
            elastic
                .compute_internal_force(&disc, black_box(&inputs), &mut force)
                .unwrap()
        })
    });

    let plastic = ElasticPlastic {
        bulk_modulus: 130_000.0,
        shear_modulus: 78_000.0,
        horizon: horizon(),
        yield_stress: 100.0,
    };
    let mut state = PlasticState::for_discretization(&disc);
    c.bench_function("elastic_plastic_force", |b| {
        b.iter(|| {
            force.fill(DVec3::ZERO);
            plastic
                .compute_internal_force(&disc, black_box(&inputs), state.step(), &mut force)
                .unwrap()
        })
    });
}

fn bench_shear_correction(c: &mut Criterion) {
    let (x, v) = common::cube(CELLS);
    let list = common::full_neighbor_list(&x, horizon());
    let disc = Discretization::contiguous(&x, &v, &list).unwrap();
    let mut scratch = x.clone();
    let mut factors = vec![0.0; disc.num_owned()];

    c.bench_function("shear_correction_factor", |b| {
        b.iter(|| {
            compute_shear_correction_factor(&disc, &mut scratch, black_box(horizon()), &mut factors)
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_weighted_volume,
    bench_dilatation,
    bench_internal_force,
    bench_shear_correction
);
criterion_main!(benches);
