//! Timing harness: warmup, measurement, and cross-strategy verification.

use std::hint::black_box;
use std::time::Instant;

use crate::error::BenchError;
use crate::fixture::Fixture;
use crate::schema::Measurement;
use crate::strategy::Strategy;
use crate::Kind;

/// One untimed pass over the fixture, returning the match count.
fn pass(fixture: &Fixture, strategy: &Strategy, target: Kind) -> u64 {
    let mut matches = 0u64;
    for shape in fixture.shapes() {
        if (strategy.check)(black_box(shape.as_ref()), target) {
            matches += 1;
        }
    }
    matches
}

/// Verify that every strategy reports the same per-pass match count.
///
/// Runs one untimed pass per strategy. The first strategy's count is the
/// baseline; any disagreement means a broken implementation, so timing
/// must not proceed. Returns the agreed per-pass count.
pub fn verify(
    fixture: &Fixture,
    strategies: &[&Strategy],
    target: Kind,
) -> Result<u64, BenchError> {
    let mut baseline: Option<u64> = None;
    for strategy in strategies {
        let matches = pass(fixture, strategy, target);
        match baseline {
            None => baseline = Some(matches),
            Some(expected) if expected != matches => {
                return Err(BenchError::CorrectnessMismatch {
                    strategy: strategy.name.to_string(),
                    expected,
                    actual: matches,
                });
            }
            Some(_) => {}
        }
    }
    Ok(baseline.unwrap_or(0))
}

/// Measure one strategy over the fixture.
///
/// Performs one untimed warmup pass, then `repetitions` timed passes over
/// every element, accumulating the total match count on a monotonic clock.
pub fn run(
    fixture: &Fixture,
    strategy: &Strategy,
    repetitions: u64,
    target: Kind,
) -> Result<Measurement, BenchError> {
    if repetitions == 0 {
        return Err(BenchError::InvalidRepetitions { repetitions });
    }

    black_box(pass(fixture, strategy, target));

    let start = Instant::now();
    let mut matches = 0u64;
    for _ in 0..repetitions {
        matches += pass(fixture, strategy, target);
    }
    let elapsed = start.elapsed();
    black_box(matches);

    let total_ns = elapsed.as_nanos();
    let checks = repetitions.saturating_mul(fixture.len() as u64).max(1);
    let ns_per_check = (total_ns as f64) / (checks as f64);

    Ok(Measurement {
        strategy: strategy.name.to_string(),
        repetitions,
        fixture_len: fixture.len() as u64,
        total_ns,
        ns_per_check,
        matches,
    })
}
