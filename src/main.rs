//! Jotter: a personal task tracker driven by short text commands.
//!
//! This is the main entry point for the `jotter` CLI. It sets up logging,
//! parses arguments, dispatches to the appropriate command handler, and
//! turns errors into exit codes.

mod cli;
mod commands;
pub mod config;
pub mod console;
pub mod dates;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod parser;
pub mod render;
pub mod session;
pub mod storage;
pub mod task;
pub mod task_list;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with responses on stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
