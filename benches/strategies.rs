//! Criterion suite comparing the type-check strategies head to head.
//!
//! Each strategy scans the same fixture for the same target kind, so the
//! only variable is the identification mechanism itself.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use typecheck_bench::fixture::{Fixture, FixtureConfig, KindDistribution};
use typecheck_bench::strategy::BUILTIN_STRATEGIES;
use typecheck_bench::Kind;

fn fixture_of(length: usize, kinds: Vec<Kind>) -> Fixture {
    Fixture::build(&FixtureConfig {
        length,
        distribution: KindDistribution::RoundRobin { kinds },
        seed: 42,
    })
    .expect("bench fixture")
}

/// Full-fixture scan per strategy at a fixed size.
fn bench_strategy_scan(c: &mut Criterion) {
    let fixture = fixture_of(10_000, Kind::ALL.to_vec());
    let mut group = c.benchmark_group("strategy_scan_10k");
    group.throughput(Throughput::Elements(fixture.len() as u64));

    for strategy in BUILTIN_STRATEGIES {
        group.bench_function(strategy.name, |bencher| {
            bencher.iter(|| {
                let mut matches = 0u64;
                for shape in fixture.shapes() {
                    if (strategy.check)(black_box(shape.as_ref()), Kind::Circle) {
                        matches += 1;
                    }
                }
                black_box(matches)
            })
        });
    }

    group.finish();
}

/// How each strategy scales with fixture length.
fn bench_strategy_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy_scaling");

    for length in [100usize, 1_000, 10_000, 100_000] {
        let fixture = fixture_of(length, vec![Kind::Circle, Kind::Square]);
        group.throughput(Throughput::Elements(length as u64));

        for strategy in BUILTIN_STRATEGIES {
            group.bench_with_input(
                BenchmarkId::new(strategy.name, length),
                &fixture,
                |bencher, fixture| {
                    bencher.iter(|| {
                        let mut matches = 0u64;
                        for shape in fixture.shapes() {
                            if (strategy.check)(black_box(shape.as_ref()), Kind::Circle) {
                                matches += 1;
                            }
                        }
                        black_box(matches)
                    })
                },
            );
        }
    }

    group.finish();
}

/// Single-element check cost: matching target vs non-matching target.
fn bench_single_check(c: &mut Criterion) {
    let fixture = fixture_of(1, vec![Kind::Circle]);
    let shape = &fixture.shapes()[0];
    let mut group = c.benchmark_group("single_check");

    for strategy in BUILTIN_STRATEGIES {
        group.bench_function(BenchmarkId::new(strategy.name, "hit"), |bencher| {
            bencher.iter(|| (strategy.check)(black_box(shape.as_ref()), black_box(Kind::Circle)))
        });
        group.bench_function(BenchmarkId::new(strategy.name, "miss"), |bencher| {
            bencher.iter(|| (strategy.check)(black_box(shape.as_ref()), black_box(Kind::Hexagon)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_strategy_scan,
    bench_strategy_scaling,
    bench_single_check
);
criterion_main!(benches);
