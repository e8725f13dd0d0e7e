//! Report rendering: human-readable table and JSON.
//!
//! Pure formatting over measurements. Rows are sorted by elapsed time
//! ascending; the input slice is never mutated.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::schema::{BenchReport, Measurement};

/// Render measurements as an aligned text table, fastest first.
pub fn render_table(measurements: &[Measurement]) -> String {
    let mut rows: Vec<&Measurement> = measurements.iter().collect();
    rows.sort_by_key(|m| m.total_ns);

    let name_width = rows
        .iter()
        .map(|m| m.strategy.len())
        .chain(std::iter::once("strategy".len()))
        .max()
        .unwrap_or(8);

    let mut out = String::new();
    writeln!(
        out,
        "{:<name_width$}  {:>12}  {:>10}  {:>12}",
        "strategy", "total (ms)", "ns/check", "matches"
    )
    .unwrap();

    for m in rows {
        writeln!(
            out,
            "{:<name_width$}  {:>12.3}  {:>10.2}  {:>12}",
            m.strategy,
            m.total_ns as f64 / 1_000_000.0,
            m.ns_per_check,
            m.matches,
        )
        .unwrap();
    }

    out
}

/// Render the full report as pretty-printed JSON.
pub fn render_json(report: &BenchReport) -> Result<String, io::Error> {
    serde_json::to_string_pretty(report).map_err(io::Error::other)
}

/// Write already-rendered output to a file.
pub fn write_to_file(path: impl AsRef<Path>, rendered: &str) -> io::Result<()> {
    fs::write(path, rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(strategy: &str, total_ns: u128, matches: u64) -> Measurement {
        Measurement {
            strategy: strategy.to_string(),
            repetitions: 10,
            fixture_len: 100,
            total_ns,
            ns_per_check: total_ns as f64 / 1000.0,
            matches,
        }
    }

    #[test]
    fn table_sorts_fastest_first() {
        let measurements = vec![
            measurement("downcast", 3_000_000, 500),
            measurement("kind-tag", 1_000_000, 500),
            measurement("type-id", 2_000_000, 500),
        ];
        let table = render_table(&measurements);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("strategy"));
        assert!(lines[1].starts_with("kind-tag"));
        assert!(lines[2].starts_with("type-id"));
        assert!(lines[3].starts_with("downcast"));
    }

    #[test]
    fn table_does_not_reorder_input() {
        let measurements = vec![
            measurement("b", 2, 1),
            measurement("a", 1, 1),
        ];
        let _ = render_table(&measurements);
        assert_eq!(measurements[0].strategy, "b");
    }

    #[test]
    fn json_round_trips_through_schema() {
        let report = BenchReport {
            run: crate::schema::RunMeta {
                schema_version: 1,
                bench_version: "0.0.0".to_string(),
                seed: 42,
                fixture_len: 100,
                target_kind: "circle".to_string(),
                timestamp_utc: "unix:0".to_string(),
                git_sha: None,
            },
            measurements: vec![measurement("kind-tag", 1_000, 50)],
        };
        let json = render_json(&report).unwrap();
        let parsed: BenchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.measurements.len(), 1);
        assert_eq!(parsed.measurements[0].strategy, "kind-tag");
        assert_eq!(parsed.run.target_kind, "circle");
    }

    #[test]
    fn rendered_output_writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let table = render_table(&[measurement("any-is", 5_000, 7)]);
        write_to_file(&path, &table).unwrap();
        let back = std::fs::read_to_string(&path).unwrap();
        assert_eq!(back, table);
    }
}
