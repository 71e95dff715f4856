use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use routing_sim::error::SimError;
use routing_sim::runtime::config::{resolve_sim_config, Algorithm, ConfigOverrides, OutputFormat};
use routing_sim::runtime::loader::load_cost_matrix;
use routing_sim::runtime::simulation::run_simulation;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Dvr,
    Lsr,
    Both,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::Dvr => vec![Algorithm::Dvr],
            AlgorithmArg::Lsr => vec![Algorithm::Lsr],
            AlgorithmArg::Both => vec![Algorithm::Dvr, Algorithm::Lsr],
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "routing_sim", version)]
#[command(about = "Compute distance vector and link state routing tables from a cost matrix")]
struct Args {
    input_file: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmArg>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    #[arg(long)]
    unreachable_cost: Option<u64>,
    #[arg(long)]
    max_passes: Option<usize>,
    #[arg(long)]
    cross_check: bool,
    #[arg(long, default_value = "WARN")]
    log_level: String,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            unreachable_cost: self.unreachable_cost,
            algorithms: self.algorithm.map(AlgorithmArg::algorithms),
            output_format: self.format,
            cross_check: self.cross_check,
            dvr_max_passes: self.max_passes,
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => return ExitCode::from(usage_exit(err)),
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn parse_args<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv)
}

fn usage_exit(err: clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            0
        }
        _ => {
            eprint!("{}", SimError::Usage(err.to_string()));
            1
        }
    }
}

fn run(args: Args) -> Result<()> {
    init_logging(&args.log_level)?;

    let cfg = resolve_sim_config(args.config.as_deref(), &args.overrides())?;
    let matrix = load_cost_matrix(&args.input_file, cfg.unreachable_cost)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_simulation(&matrix, &cfg, &mut out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let level = level.parse::<Level>()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .init();
    Ok(())
}
