use thiserror::Error;

/// Fatal benchmark errors. None are retried: a benchmark run requires
/// deterministic, fully-specified input, so any failure aborts the run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Bad fixture parameters (zero length, empty kind list, bad weights,
    /// or an unrecognized kind name from the CLI).
    #[error("invalid fixture configuration: {reason}")]
    Configuration { reason: String },

    /// Registry lookup for a name nothing registered.
    #[error("unknown strategy: {name:?}")]
    UnknownStrategy { name: String },

    /// The harness requires at least one timed repetition.
    #[error("repetitions must be >= 1, got {repetitions}")]
    InvalidRepetitions { repetitions: u64 },

    /// Strategies disagreed on the per-pass match count, so at least one
    /// implementation is broken and no timing can be trusted.
    #[error(
        "strategy {strategy:?} found {actual} matches per pass, expected {expected} \
         (agreed by previously verified strategies)"
    )]
    CorrectnessMismatch {
        strategy: String,
        expected: u64,
        actual: u64,
    },

    #[error("report i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        BenchError::Configuration {
            reason: reason.into(),
        }
    }
}
