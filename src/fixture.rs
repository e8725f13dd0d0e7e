//! Fixture construction for type-check benchmarks.
//!
//! A fixture is a fixed-length, ordered sequence of owned trait objects with
//! a controlled mix of concrete kinds. Construction is deterministic: the
//! round-robin distribution is inherently ordered, and the weighted
//! distribution draws from a ChaCha8 RNG seeded from the configuration, so
//! the same configuration always yields the same fixture.

use std::any::Any;

use rand::distributions::{Distribution as _, WeightedIndex};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::BenchError;
use crate::Kind;

/// Object-safe view of one polymorphic value.
///
/// `kind` is the explicit discriminant tag (the tagged-union technique
/// expressed through a virtual accessor); `as_any` exposes the value for
/// downcast and type-identity checks.
pub trait Shape: Any {
    fn kind(&self) -> Kind;
    fn as_any(&self) -> &dyn Any;
}

macro_rules! declare_shapes {
    ($($name:ident => $kind:path),+ $(,)?) => {
        $(
            #[derive(Debug, Default)]
            pub struct $name;

            impl Shape for $name {
                fn kind(&self) -> Kind {
                    $kind
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )+

        fn box_kind(kind: Kind) -> Box<dyn Shape> {
            match kind {
                $($kind => Box::new($name),)+
            }
        }
    };
}

declare_shapes! {
    Circle => Kind::Circle,
    Square => Kind::Square,
    Triangle => Kind::Triangle,
    Hexagon => Kind::Hexagon,
}

/// How concrete kinds are distributed over the fixture.
#[derive(Debug, Clone)]
pub enum KindDistribution {
    /// Cycle through `kinds` in order until the fixture is full.
    RoundRobin { kinds: Vec<Kind> },
    /// Draw each element from `weights` with the configured seed.
    Weighted { weights: Vec<(Kind, u32)> },
}

/// Configuration for fixture construction.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Number of elements; must be nonzero.
    pub length: usize,
    pub distribution: KindDistribution,
    /// RNG seed; only consulted by the weighted distribution.
    pub seed: u64,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            length: 10_000,
            distribution: KindDistribution::RoundRobin {
                kinds: Kind::ALL.to_vec(),
            },
            seed: 42,
        }
    }
}

/// An immutable, ordered sequence of polymorphic values.
///
/// Per-kind counts are recorded at build time, so the expected match count
/// for any target kind is known without re-scanning.
pub struct Fixture {
    shapes: Vec<Box<dyn Shape>>,
    counts: [u64; Kind::ALL.len()],
}

impl Fixture {
    /// Build a fixture from the configuration.
    pub fn build(config: &FixtureConfig) -> Result<Fixture, BenchError> {
        if config.length == 0 {
            return Err(BenchError::configuration("fixture length must be >= 1"));
        }

        let shapes: Vec<Box<dyn Shape>> = match &config.distribution {
            KindDistribution::RoundRobin { kinds } => {
                if kinds.is_empty() {
                    return Err(BenchError::configuration(
                        "round-robin distribution needs at least one kind",
                    ));
                }
                kinds
                    .iter()
                    .cycle()
                    .take(config.length)
                    .map(|&k| box_kind(k))
                    .collect()
            }
            KindDistribution::Weighted { weights } => {
                if weights.is_empty() {
                    return Err(BenchError::configuration(
                        "weighted distribution needs at least one kind",
                    ));
                }
                let mut seen = [false; Kind::ALL.len()];
                for (kind, _) in weights {
                    if std::mem::replace(&mut seen[kind.index()], true) {
                        return Err(BenchError::configuration(format!(
                            "kind {} appears more than once in weights",
                            kind.as_str()
                        )));
                    }
                }
                let index = WeightedIndex::new(weights.iter().map(|(_, w)| *w)).map_err(|e| {
                    BenchError::configuration(format!("invalid weights: {e}"))
                })?;
                let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
                (0..config.length)
                    .map(|_| box_kind(weights[index.sample(&mut rng)].0))
                    .collect()
            }
        };

        let mut counts = [0u64; Kind::ALL.len()];
        for shape in &shapes {
            counts[shape.kind().index()] += 1;
        }

        Ok(Fixture { shapes, counts })
    }

    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of elements of `kind`, recorded at build time.
    pub fn count_of(&self, kind: Kind) -> u64 {
        self.counts[kind.index()]
    }
}

impl std::fmt::Debug for Fixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fixture")
            .field("len", &self.shapes.len())
            .field("counts", &self.counts)
            .finish()
    }
}
