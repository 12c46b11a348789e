//! # pokersim CLI Library
//!
//! Command-line surface over the simulator engine and its agents.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code. Output goes to the writers passed in, so tests drive
//! it with `Vec<u8>` buffers.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = pokersim_cli::run(["pokersim", "eval", "--hole", "Ah Kh", "--board", "Qh Jh Th"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Play hands on one table and write a JSONL hand history
//! - `deal`: Deal a single hand for inspection
//! - `eval`: Classify a hole/board combination
//! - `cfg`: Display the resolved configuration with value sources
//! - `dataset`: Convert a hand history into training samples

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{COMMANDS, Commands, PokersimCli};
use commands::{
    handle_cfg_command, handle_dataset_command, handle_deal_command, handle_eval_command,
    handle_sim_command,
};

pub use error::{BatchValidationError, CliError};

/// Runs one CLI invocation.
///
/// Returns [`exit_code::SUCCESS`] on success, [`exit_code::INTERRUPTED`]
/// when a simulation stopped early and [`exit_code::ERROR`] otherwise.
/// `--help` and `--version` print to `out` and succeed.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokersimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = print_usage(err, &e.to_string());
                    exit_code::ERROR
                }
            };
        }
    };

    let name = cli.cmd.name();
    tracing::debug!(command = name, "dispatching");
    let result = match cli.cmd {
        Commands::Sim {
            hands,
            output,
            seed,
            agent,
            players,
        } => handle_sim_command(
            hands,
            output.as_deref(),
            seed,
            agent.as_deref(),
            players,
            out,
            err,
        ),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out, err),
        Commands::Eval {
            hole,
            board,
            best_five,
        } => handle_eval_command(&hole, &board, best_five, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Dataset {
            input,
            output,
            shuffle,
        } => handle_dataset_command(&input, &output, shuffle, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::warn!(command = name, "{}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn print_usage(err: &mut dyn Write, parse_error: &str) -> std::io::Result<()> {
    writeln!(err, "{}", parse_error)?;
    writeln!(err)?;
    writeln!(err, "pokersim poker hand simulator")?;
    writeln!(err, "Usage: pokersim <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: pokersim --help")
}
