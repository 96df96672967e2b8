use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tpcgen_catalog::tpcds_catalog;
use tpcgen_generate::{GenerationError, Orchestrator, RunConfig};
use tpcgen_sink::{build_sink, SinkError, SinkFormat, WriteMode};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tpcgen", version, about = "Distributed TPC-DS dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the full table catalog to a storage sink.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the dsdgen binary.
    #[arg(long, value_name = "PATH")]
    dsdgen_path: PathBuf,
    /// Path to the dsdgen distribution definitions (tpcds.idx).
    #[arg(long, value_name = "PATH")]
    distributions: PathBuf,
    /// Scale factor in gigabytes.
    #[arg(long, default_value_t = 1)]
    scale: u32,
    /// Partitions per parallelizable table.
    #[arg(long, default_value_t = 4)]
    parallel: u32,
    /// Single-character field delimiter.
    #[arg(long, default_value_t = '|')]
    delimiter: char,
    /// Root directory the sink writes tables under.
    #[arg(long, value_name = "PATH")]
    output_root: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "parquet")]
    format: FormatArg,
    /// Behavior when a table destination already exists.
    #[arg(long, value_enum, default_value = "overwrite")]
    write_mode: ModeArg,
    /// Scratch root for generator staging (defaults to the system temp dir).
    #[arg(long, value_name = "PATH")]
    scratch_root: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Parquet,
    Csv,
    Iceberg,
}

impl From<FormatArg> for SinkFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Parquet => SinkFormat::Parquet,
            FormatArg::Csv => SinkFormat::Csv,
            FormatArg::Iceberg => SinkFormat::Iceberg,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    Overwrite,
    Append,
    ErrorIfExists,
}

impl From<ModeArg> for WriteMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Overwrite => WriteMode::Overwrite,
            ModeArg::Append => WriteMode::Append,
            ModeArg::ErrorIfExists => WriteMode::ErrorIfExists,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Generate(args) => run_generate(args).await,
    };

    match outcome {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => {
            error!("generation run completed with failed tables");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "generation run aborted");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether any table failed.
async fn run_generate(args: GenerateArgs) -> Result<bool, CliError> {
    // Sink construction fails fast on unsupported formats, before any
    // generator work starts.
    let sink = build_sink(
        args.format.into(),
        &args.output_root,
        args.delimiter,
        args.write_mode.into(),
    )?;
    std::fs::create_dir_all(&args.output_root)?;

    let config = RunConfig {
        dsdgen_path: args.dsdgen_path,
        distributions_path: args.distributions,
        scale: args.scale,
        parallelism: args.parallel,
        delimiter: args.delimiter,
        scratch_root: args
            .scratch_root
            .unwrap_or_else(std::env::temp_dir),
    };
    let orchestrator = Orchestrator::new(config)?;

    let catalog = tpcds_catalog();
    let report = orchestrator.run(&catalog, sink.as_ref()).await;
    report.write_json(&args.output_root.join("generation_report.json"))?;

    Ok(report.has_failures())
}
