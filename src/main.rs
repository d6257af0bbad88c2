//! xenctl - command-line entry point.

use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use clap::Parser;

use xenctl::ControlError;
use xenctl::cmdline::{self, Session};
use xenctl::config::Defaults;

#[macro_use]
extern crate log;

/// Exit code for a malformed command line.
const EXIT_USAGE: i32 = 2;

/// Exit code for every other failure.
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "xenctl",
    version,
    about = "Control domains, partitions and physical access grants on a virtualization host",
    after_help = "Run `xenctl help` to list the available commands."
)]
struct Cli {
    /// Configuration file (default: ./xenctl.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host state file, overriding the configured one
    #[arg(short, long, value_name = "FILE")]
    state: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Command, sub-command and `-<letter><value>` flags
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Err(e) = try_main(&cli) {
        exit(report(&cli, &e));
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let mut defaults =
        Defaults::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(state) = &cli.state {
        defaults.state_file = state.clone();
    }
    debug!("host state file: {}", defaults.state_file.display());

    let mut session = Session::from_defaults(defaults);
    cmdline::dispatch(&mut session, &cli.words)?;
    Ok(())
}

/// Print the failure for the operator and pick the exit code.
fn report(cli: &Cli, err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ControlError>() {
        Some(ControlError::ParseFailed(msg)) => {
            error!("{}", msg);
            if let Some(usage) = cmdline::usage_for(&cli.words) {
                eprintln!("Usage: xenctl {}", usage);
            }
        }
        Some(ControlError::CommandFailed(msg)) => error!("{}", msg),
        None => error!("{:#}", err),
    }
    exit_code(err)
}

/// `EXIT_USAGE` for a parse failure, `EXIT_FAILURE` for anything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ControlError>() {
        Some(e) if e.is_parse_failure() => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}
