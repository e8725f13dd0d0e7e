use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use typecheck_bench::error::BenchError;
use typecheck_bench::fixture::{Fixture, FixtureConfig, KindDistribution};
use typecheck_bench::report;
use typecheck_bench::schema::{BenchReport, RunMeta};
use typecheck_bench::strategy::StrategyRegistry;
use typecheck_bench::{suite, Kind};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum DistributionArg {
    /// Cycle through --kinds in order.
    #[default]
    RoundRobin,
    /// Sample each element from --weights with the configured seed.
    Weighted,
}

#[derive(Parser, Debug)]
#[command(name = "typecheck-bench")]
#[command(about = "Deterministic benchmark runner for runtime type-check strategies")]
struct Args {
    /// Fixture length (number of polymorphic values).
    #[arg(long, default_value_t = 10_000)]
    length: usize,

    /// Timed repetitions per strategy (one untimed warmup pass is added).
    #[arg(long, short = 'r', default_value_t = 100)]
    repetitions: u64,

    /// Strategies to run, in order.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "kind-tag,downcast,type-id,any-is"
    )]
    strategies: Vec<String>,

    /// Kind the strategies check for.
    #[arg(long, value_enum, default_value_t = Kind::Circle)]
    target_kind: Kind,

    /// How kinds are distributed over the fixture.
    #[arg(long, value_enum, default_value_t = DistributionArg::RoundRobin)]
    distribution: DistributionArg,

    /// Kinds for the round-robin distribution.
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "circle,square,triangle,hexagon"
    )]
    kinds: Vec<Kind>,

    /// Weights for the weighted distribution, as kind=weight pairs.
    #[arg(long, value_delimiter = ',', value_name = "KIND=WEIGHT")]
    weights: Vec<String>,

    /// Seed for the weighted distribution.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Emit the full JSON report instead of the table.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Where to write the output. If omitted, prints to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn now_utc_rfc3339() -> String {
    // Avoid a chrono dependency; this is "good enough" for reports.
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn git_sha_short() -> Option<String> {
    // Best-effort: read from environment set by CI/build scripts.
    std::env::var("GIT_SHA")
        .ok()
        .or_else(|| std::env::var("GITHUB_SHA").ok())
        .map(|s| s.chars().take(12).collect())
}

/// Parse a `kind=weight` pair. An unrecognized kind name is a
/// configuration error, same as referencing an undeclared kind.
fn parse_weight(raw: &str) -> Result<(Kind, u32), BenchError> {
    let (kind_str, weight_str) = raw.split_once('=').ok_or_else(|| {
        BenchError::configuration(format!("weight {raw:?} is not of the form kind=weight"))
    })?;
    let kind = Kind::from_str(kind_str.trim(), true).map_err(|_| {
        BenchError::configuration(format!("unknown kind {:?} in weights", kind_str.trim()))
    })?;
    let weight: u32 = weight_str.trim().parse().map_err(|_| {
        BenchError::configuration(format!("weight {weight_str:?} is not a non-negative integer"))
    })?;
    Ok((kind, weight))
}

fn distribution_from_args(args: &Args) -> Result<KindDistribution, BenchError> {
    match args.distribution {
        DistributionArg::RoundRobin => Ok(KindDistribution::RoundRobin {
            kinds: args.kinds.clone(),
        }),
        DistributionArg::Weighted => {
            if args.weights.is_empty() {
                return Err(BenchError::configuration(
                    "weighted distribution requires --weights",
                ));
            }
            let weights = args
                .weights
                .iter()
                .map(|raw| parse_weight(raw))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(KindDistribution::Weighted { weights })
        }
    }
}

fn run_cli(args: &Args) -> Result<(), BenchError> {
    let fixture = Fixture::build(&FixtureConfig {
        length: args.length,
        distribution: distribution_from_args(args)?,
        seed: args.seed,
    })?;

    let registry = StrategyRegistry::builtin();
    let strategies = registry.resolve(&args.strategies)?;

    let measurements = suite::run(&fixture, &strategies, args.repetitions, args.target_kind)?;

    let report = BenchReport {
        run: RunMeta {
            schema_version: 1,
            bench_version: env!("CARGO_PKG_VERSION").to_string(),
            seed: args.seed,
            fixture_len: fixture.len() as u64,
            target_kind: args.target_kind.as_str().to_string(),
            timestamp_utc: now_utc_rfc3339(),
            git_sha: git_sha_short(),
        },
        measurements,
    };

    let rendered = if args.json {
        report::render_json(&report)?
    } else {
        report::render_table(&report.measurements)
    };

    if let Some(out) = &args.out {
        report::write_to_file(out, &rendered)?;
    } else {
        print!("{rendered}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run_cli(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_pairs_parse() {
        assert_eq!(parse_weight("circle=3").unwrap(), (Kind::Circle, 3));
        assert_eq!(parse_weight(" hexagon = 1 ").unwrap(), (Kind::Hexagon, 1));
    }

    #[test]
    fn undeclared_kind_in_weights_is_a_configuration_error() {
        let err = parse_weight("rhombus=2").unwrap_err();
        assert!(matches!(err, BenchError::Configuration { .. }));
    }

    #[test]
    fn malformed_weight_pair_is_rejected() {
        assert!(parse_weight("circle").is_err());
        assert!(parse_weight("circle=lots").is_err());
    }
}
