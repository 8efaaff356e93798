use std::path::PathBuf;

use clap::Parser;
use garage_lib::Repository;
use sysexits::ExitCode;
use tracing::Level;

mod vehicle;

#[derive(Parser, Debug)]
#[command(name = "garage")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: vehicle::Command,

    /// Override the configured vehicle store
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Failures surfaced to the user, each mapping onto an exit code.
#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Lib(garage_lib::Error),
}

impl From<garage_lib::Error> for CliError {
    fn from(e: garage_lib::Error) -> Self {
        Self::Lib(e)
    }
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        use garage_lib::Error::*;

        match self {
            CliError::Usage(_) => ExitCode::Usage,
            CliError::Lib(e) => match e {
                Io { .. } => ExitCode::IoErr,
                MalformedStore { .. } | Serialize(_) => ExitCode::DataErr,
                MalformedConfig { .. } | SerializeConfig(_) => ExitCode::Config,
                NoHomeDir(_) => ExitCode::OsFile,
            },
        }
    }
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::Ok,
        Err(e) => {
            match &e {
                CliError::Usage(msg) => eprintln!("error: {msg}"),
                CliError::Lib(err) => eprintln!("error: {err}"),
            }
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let repo = match cli.store {
        Some(path) => Repository::open(path),
        None => Repository::new()?,
    };

    vehicle::handle(&repo, cli.command)
}
