//! Command implementations for jotter.
//!
//! Routes the parsed CLI to its handler. Every handler works from the same
//! resolved [`Config`]: the config file, then command-line overrides.

use crate::cli::{Cli, Command, ExecArgs};
use crate::config::Config;
use crate::console;
use crate::error::{JotterError, Result};
use crate::render::{self, Renderer};
use crate::session::Session;
use crate::storage::Storage;
use log::info;
use std::io;

/// Dispatch the CLI to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        None | Some(Command::Shell) => cmd_shell(&config),
        Some(Command::Exec(args)) => cmd_exec(&config, args),
        Some(Command::Config) => cmd_config(&config),
    }
}

/// Load the config file (explicit or discovered) and apply CLI overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };

    if let Some(path) = &cli.data_file {
        config.data_file = path.clone();
    }
    if cli.no_border {
        config.show_border = false;
    }

    config.validate()?;
    Ok(config)
}

fn open_session(config: &Config) -> Session {
    info!("using data file {}", config.data_file.display());
    Session::open(
        Storage::new(config.data_file.clone()),
        Renderer::from_config(config),
    )
}

fn cmd_shell(config: &Config) -> Result<()> {
    let mut session = open_session(config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    console::run(&mut session, stdin.lock(), stdout.lock())
        .map_err(|e| JotterError::Io(format!("failed to write to stdout: {}", e)))
}

/// Run one command line. The response is printed without the border so the
/// output can be piped. A change that could not be saved fails the command.
fn cmd_exec(config: &Config, args: ExecArgs) -> Result<()> {
    let mut session = open_session(config);
    let line = args.words.join(" ");

    let response = session.handle(&line);
    if let Some(err) = response.error {
        return Err(err);
    }

    println!("{}", render::strip_border(&response.text));
    match response.save_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
