//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Interactive menu (default)
    Repl,
    /// Evaluate one operation, print it and record it in the history
    Eval {
        /// Left operand (the only operand for sqrt)
        #[arg(allow_hyphen_values = true)]
        left: String,
        /// Operation: + - * / ^ % sqrt
        #[arg(allow_hyphen_values = true)]
        op: String,
        /// Right operand (omit for sqrt)
        #[arg(allow_hyphen_values = true)]
        right: Option<String>,
    },
    /// Print the history log verbatim
    History,
}
