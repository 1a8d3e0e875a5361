//! CLI argument parsing for jotter.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Jotter: a personal task tracker you talk to one line at a time.
///
/// Commands inside a session:
///   todo <desc> | deadline <desc> /by <when> | event <desc> /from <start> /to <end>
///   list | mark <n> | unmark <n> | delete <n> | find <keyword>
///   snooze <n> /by <when> | snooze <n> /from <start> /to <end> | bye
#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Task file to use instead of the configured `data_file`.
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Config file to read instead of `./jotter.yaml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print responses without the separator lines.
    #[arg(long, global = true)]
    pub no_border: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands. With none, an interactive shell starts.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive session on standard input.
    Shell,

    /// Run a single command line and exit.
    ///
    /// Example: `jotter exec deadline return book /by 2019-12-02`
    Exec(ExecArgs),

    /// Print the effective configuration as YAML.
    Config,
}

/// Arguments for the `exec` command.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// The command line, as it would be typed in a session.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["jotter"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.data_file.is_none());
        assert!(!cli.no_border);
    }

    #[test]
    fn test_exec_collects_words() {
        let cli = Cli::try_parse_from([
            "jotter",
            "--data-file",
            "/tmp/t.jsonl",
            "exec",
            "deadline",
            "essay",
            "/by",
            "2019-12-02",
        ])
        .unwrap();

        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/t.jsonl")));
        match cli.command {
            Some(Command::Exec(args)) => {
                assert_eq!(args.words.join(" "), "deadline essay /by 2019-12-02");
            }
            other => panic!("expected exec, got {:?}", other),
        }
    }

    #[test]
    fn test_exec_requires_words() {
        assert!(Cli::try_parse_from(["jotter", "exec"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["jotter", "shell", "--no-border"]).unwrap();
        assert!(cli.no_border);
        assert!(matches!(cli.command, Some(Command::Shell)));
    }
}
