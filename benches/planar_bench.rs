//! Criterion benchmarks for the point-set algorithms.
//!
//! Inputs are uniform random lattice points from a fixed seed, at several
//! sizes to show scaling.

#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::geometry::LineF;
use planar::math::{IVec2, Vec2};
use planar::operations::clip::HalfPlaneIntersection;
use planar::operations::hull::{ConvexHull, FarthestPair};
use planar::operations::proximity::{ClosestPair, MaxCoveredPoints, SmallestEnclosingDisc};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<IVec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            IVec2::new(
                rng.gen_range(-1_000_000..=1_000_000),
                rng.gen_range(-1_000_000..=1_000_000),
            )
        })
        .collect()
}

/// Tangent lines of the unit circle, turning counterclockwise.
fn random_tangents(n: usize, seed: u64) -> Vec<LineF> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let t: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let p = Vec2::new(t.cos(), t.sin());
            LineF::new(p, p + Vec2::new(-t.sin(), t.cos()))
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 7 + n as u64),
                |pts| {
                    let _ = black_box(ConvexHull::new(pts).execute().unwrap());
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("farthest_pair", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 11 + n as u64),
                |pts| {
                    let _ = black_box(FarthestPair::new(pts).execute().unwrap());
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_proximity(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity");
    for &n in &[1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("closest_pair", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 13 + n as u64),
                |pts| {
                    let _ = black_box(ClosestPair::new(pts).execute().unwrap());
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("enclosing_disc", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(17);
            b.iter_batched(
                || {
                    random_points(n, 19 + n as u64)
                        .into_iter()
                        .map(|p| Vec2::new(p.x as f64, p.y as f64))
                        .collect::<Vec<_>>()
                },
                |pts| {
                    let _ = black_box(
                        SmallestEnclosingDisc::new(pts)
                            .execute_with_rng(&mut rng)
                            .unwrap(),
                    );
                },
                BatchSize::LargeInput,
            );
        });
    }
    for &n in &[100usize, 300] {
        group.bench_with_input(BenchmarkId::new("max_covered", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 23 + n as u64),
                |pts| {
                    let _ = black_box(MaxCoveredPoints::new(pts, 300_000).execute().unwrap());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_half_planes(c: &mut Criterion) {
    let mut group = c.benchmark_group("half_planes");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || random_tangents(n, 29 + n as u64),
                |lines| {
                    let _ = black_box(HalfPlaneIntersection::new(lines).execute().unwrap());
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_proximity, bench_half_planes);
criterion_main!(benches);
