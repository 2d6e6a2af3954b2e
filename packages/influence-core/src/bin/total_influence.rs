//! Total Influence CLI
//!
//! Reads a `from;to;value` edge list, writes the non-zero off-diagonal
//! entries of (I - A)^-1 for every connected group in the same shape.
//!
//! # Usage
//!
//! ```bash
//! # Fractions, default tolerance 1e-10
//! total-influence -i input.csv -o output.csv
//!
//! # Percentages, tolerance 1e-9
//! total-influence -s input.csv -d output.csv -b100 -e 9
//!
//! # YAML config, CLI flags still win
//! total-influence --config influence.yaml --on-singular skip --report json
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides `-v`); the run summary goes to
//! stdout. Exit code 0 on success, 1 on any error.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use influence_core::config::ConfigError;
use influence_core::{InfluenceError, InfluencePipeline, RunConfig, SingularPolicy, UnitScale};

#[derive(Parser)]
#[command(name = "total-influence")]
#[command(about = "Total influence (Leontief inverse) over a weighted edge list", long_about = None)]
struct Cli {
    /// Input edge list, one `from;to;value` per line [default: input.csv]
    #[arg(short = 'i', short_alias = 's', long)]
    input: Option<PathBuf>,

    /// Output edge list [default: output.csv]
    #[arg(short = 'o', short_alias = 'd', long)]
    output: Option<PathBuf>,

    /// Weight unit: 1 for fractions, 100 for percentages (`-b1`, `-b100`)
    #[arg(short = 'b', long, value_parser = parse_unit)]
    unit: Option<UnitScale>,

    /// Zero tolerance is 10^-N [default: 10]
    #[arg(short = 'e', long, value_name = "N")]
    epsilon_exponent: Option<u32>,

    /// YAML configuration file (version 1)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Group whose I - A is singular or fails the self-check: abort the run or skip the group
    #[arg(long, value_parser = parse_policy)]
    on_singular: Option<SingularPolicy>,

    /// Skip the C·(I - A) = I self-check
    #[arg(long)]
    no_verify: bool,

    /// Skip the per-column weight sum check
    #[arg(long)]
    no_column_check: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Summary format on stdout
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn parse_unit(s: &str) -> Result<UnitScale, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a unit; use 1 or 100", s))?;
    UnitScale::try_from(value).map_err(|err: ConfigError| err.to_string())
}

fn parse_policy(s: &str) -> Result<SingularPolicy, String> {
    s.parse::<SingularPolicy>().map_err(|err| err.to_string())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    if let Err(err) = Registry::default().with(filter).with(fmt_layer).try_init() {
        eprintln!("Warning: logging unavailable: {}", err);
    }
}

/// Defaults, then YAML, then flags
fn build_config(cli: &Cli) -> Result<RunConfig, InfluenceError> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::from_yaml(path)?,
        None => RunConfig::default(),
    };

    if let Some(input) = &cli.input {
        config = config.input(input.clone());
    }
    if let Some(output) = &cli.output {
        config = config.output(output.clone());
    }
    if let Some(unit) = cli.unit {
        config = config.unit(unit);
    }
    if let Some(exponent) = cli.epsilon_exponent {
        config = config.epsilon_exponent(exponent);
    }
    if let Some(policy) = cli.on_singular {
        config = config.singular_policy(policy);
    }
    if cli.no_verify {
        config = config.verify_inverse(false);
    }
    if cli.no_column_check {
        config = config.check_column_sums(false);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), InfluenceError> {
    let config = build_config(cli)?;
    let pipeline = InfluencePipeline::new(config)?;
    let report = pipeline.run()?;

    match cli.report {
        ReportFormat::Text => println!("{}", report),
        ReportFormat::Json => {
            let json = report.to_json().map_err(|err| {
                InfluenceError::new(influence_core::ErrorKind::IO, err.to_string()).with_source(err)
            })?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
