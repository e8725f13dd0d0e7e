//! The sequential benchmark pipeline: verify, then measure each strategy.

use crate::error::BenchError;
use crate::fixture::Fixture;
use crate::harness;
use crate::schema::Measurement;
use crate::strategy::Strategy;
use crate::Kind;

/// Run the selected strategies over the fixture.
///
/// Cross-strategy verification happens first; timing results are only
/// produced once every strategy agrees on the per-pass match count. Any
/// failure aborts the whole run (benchmarking has no partial-success
/// semantics).
pub fn run(
    fixture: &Fixture,
    strategies: &[&Strategy],
    repetitions: u64,
    target: Kind,
) -> Result<Vec<Measurement>, BenchError> {
    if repetitions == 0 {
        return Err(BenchError::InvalidRepetitions { repetitions });
    }

    harness::verify(fixture, strategies, target)?;

    let mut measurements = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        measurements.push(harness::run(fixture, strategy, repetitions, target)?);
    }
    Ok(measurements)
}
