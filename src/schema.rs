use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub seed: u64,
    pub fixture_len: u64,
    pub target_kind: String,
    pub timestamp_utc: String,
    pub git_sha: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub strategy: String,

    pub repetitions: u64,
    pub fixture_len: u64,

    pub total_ns: u128,
    pub ns_per_check: f64,

    /// Matches accumulated over all timed repetitions.
    pub matches: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub run: RunMeta,
    pub measurements: Vec<Measurement>,
}
