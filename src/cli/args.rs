//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::DEFAULT_HISTORY_FILE;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "calclog")]
#[command(about = "Single-operation calculator with a rotating history log", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// History log file (default: history.txt in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) history_file: Option<PathBuf>,

    /// Output as JSON (eval and history)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Ignore config files
    #[arg(long, global = true)]
    pub(crate) no_config: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.history_file.is_none() {
            self.history_file = config.history_file.clone();
        }
        self
    }

    pub(crate) fn history_path(&self) -> PathBuf {
        self.history_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("calclog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_repl_and_history_txt() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.history_path(), PathBuf::from("history.txt"));
    }

    #[test]
    fn eval_accepts_negative_operands() {
        let cli = parse(&["eval", "-8", "^", "-1"]);
        match cli.command {
            Some(Commands::Eval { left, op, right }) => {
                assert_eq!(left, "-8");
                assert_eq!(op, "^");
                assert_eq!(right.as_deref(), Some("-1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn eval_right_operand_is_optional() {
        let cli = parse(&["eval", "9", "sqrt"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Eval { right: None, .. })
        ));
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            history_file: Some(PathBuf::from("/tmp/from-config.txt")),
            debug: true,
        };
        let cli = parse(&[]).with_config(&config);
        assert!(cli.debug);
        assert_eq!(cli.history_path(), PathBuf::from("/tmp/from-config.txt"));
    }

    #[test]
    fn cli_wins_over_config() {
        let config = Config {
            history_file: Some(PathBuf::from("/tmp/from-config.txt")),
            debug: false,
        };
        let cli = parse(&["--history-file", "mine.txt", "history"]).with_config(&config);
        assert_eq!(cli.history_path(), PathBuf::from("mine.txt"));
        assert!(matches!(cli.command, Some(Commands::History)));
    }
}
