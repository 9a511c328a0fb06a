//! Planning core benchmarks.
//!
//! Benchmarks for the CPU-heavy core operations:
//! - Nearest-neighbour queries on a grown roadmap
//! - Kinodynamic steering between random states
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use marga_plan::{
    Configuration, KinodynamicConfig, KinodynamicSteering, Roadmap, SteeringMethod,
    WeightedDistance,
};

fn random_config(rng: &mut StdRng, dim: usize) -> Configuration {
    Configuration::new((0..dim).map(|_| rng.gen_range(-10.0..10.0)).collect())
}

fn grown_roadmap(nodes: usize, dim: usize) -> Roadmap {
    let mut rng = StdRng::seed_from_u64(11);
    let mut roadmap = Roadmap::new(Arc::new(WeightedDistance::uniform(dim)), dim);
    for _ in 0..nodes {
        roadmap.add_node(random_config(&mut rng, dim));
    }
    roadmap
}

fn bench_nearest_node(c: &mut Criterion) {
    let dim = 6;
    let roadmap = grown_roadmap(1000, dim);
    let mut rng = StdRng::seed_from_u64(13);
    let queries: Vec<Configuration> = (0..64).map(|_| random_config(&mut rng, dim)).collect();

    c.bench_function("nearest_node_1000", |b| {
        let mut i = 0;
        b.iter(|| {
            let query = &queries[i % queries.len()];
            i += 1;
            black_box(roadmap.nearest_node(query))
        })
    });
}

fn bench_roadmap_growth(c: &mut Criterion) {
    let dim = 6;
    c.bench_function("add_node_500", |b| {
        b.iter(|| {
            let roadmap = grown_roadmap(500, dim);
            black_box(roadmap.nodes().len())
        })
    });
}

fn bench_kinodynamic_steer(c: &mut Criterion) {
    let dof = 3;
    let steering = KinodynamicSteering::new(
        2 * dof,
        dof,
        &KinodynamicConfig {
            a_max: 0.5,
            v_max: 1.0,
        },
    )
    .unwrap();

    let mut rng = StdRng::seed_from_u64(17);
    let states: Vec<(Configuration, Configuration)> = (0..64)
        .map(|_| {
            let positions = |rng: &mut StdRng| -> Vec<f64> {
                let mut values: Vec<f64> = (0..dof).map(|_| rng.gen_range(-5.0..5.0)).collect();
                values.extend((0..dof).map(|_| rng.gen_range(-0.9..0.9)));
                values
            };
            (
                Configuration::new(positions(&mut rng)),
                Configuration::new(positions(&mut rng)),
            )
        })
        .collect();

    c.bench_function("kinodynamic_steer_3dof", |b| {
        let mut i = 0;
        b.iter(|| {
            let (q1, q2) = &states[i % states.len()];
            i += 1;
            black_box(steering.steer(q1, q2).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_nearest_node,
    bench_roadmap_growth,
    bench_kinodynamic_steer
);
criterion_main!(benches);
