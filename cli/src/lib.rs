//! # fivedraw CLI
//!
//! Terminal front end for the five-card draw engine. The entry point is
//! [`run`], which parses the argument list and dispatches to a subcommand
//! handler; all output goes through the injected writers, so the whole
//! surface is testable without a terminal.
//!
//! ## Subcommands
//!
//! - `play`: interactive session, one human seat against bot opponents
//! - `sim`: bot-only rounds with a summary and chip-conservation check
//! - `stats`: aggregate session logs (plain or zstd-compressed JSONL)
//! - `deal`: deal and evaluate one sample hand
//! - `cfg`: show the resolved configuration and value sources
//!
//! ## Example
//!
//! ```no_run
//! use std::io;
//! let args = vec!["fivedraw", "deal", "--seed", "42"];
//! let code = fivedraw_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, FivedrawCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "stats", "deal", "cfg"];

/// Parses the argument list and runs the requested subcommand.
///
/// Returns the process exit code: `0` on success, `2` for usage, config,
/// or validation errors, `130` when an interactive prompt is interrupted.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FivedrawCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            // help and version go to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return 2;
                }
                return 0;
            }
            if writeln!(err, "{}", e).is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return 2;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return 2;
                }
            }
            if writeln!(err, "\nFor full help, run: fivedraw --help").is_err() {
                return 2;
            }
            return 2;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            bots,
            strategy,
            seed,
            session,
            resume,
            name,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                bots,
                strategy,
                seed,
                session,
                resume,
                name,
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Sim {
            rounds,
            bots,
            strategy,
            seed,
            output,
        } => handle_sim_command(rounds, bots, strategy, seed, output, out),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => 0,
        Err(CliError::Interrupted(_)) => 130,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return 2;
            }
            2
        }
    }
}
