//! # holdem CLI Library
//!
//! Command-line driver for the `holdem-engine` crate: deal from a shuffled
//! deck, evaluate and compare hands, play a scripted hand and show the
//! configuration in effect.
//!
//! The entry point is [`run`], which parses arguments, dispatches to a
//! command handler and returns the process exit code.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "eval", "Kc", "Ks", "5s", "7s", "Jd"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("One Pair"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Shuffle a deck and deal cards from the top
//! - `eval`: Evaluate a hand, optionally against a second one
//! - `play`: Play one scripted hand at a fresh table
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_play_command,
};

pub use error::CliError;

/// Parses `args` and runs the selected command.
///
/// Returns [`exit_code::SUCCESS`] on success and [`exit_code::ERROR`] for
/// argument, configuration, input and engine errors. Errors are written to
/// `err` prefixed with `Error:`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "play", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return match write!(out, "{}", e) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(_) => exit_code::ERROR,
                };
            }
            let _ = write_usage(err, &e.to_string(), COMMANDS);
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Deal { seed, count } => handle_deal_command(seed, count, out),
        Commands::Eval { cards, against } => handle_eval_command(&cards, against.as_deref(), out),
        Commands::Play {
            players,
            seed,
            actions,
            reveal,
        } => handle_play_command(
            PlayOptions {
                players: usize::from(players),
                seed,
                actions: &actions,
                reveal,
            },
            out,
            err,
        ),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_msg: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", clap_msg)?;
    writeln!(err, "Usage: holdem <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: holdem --help")
}
