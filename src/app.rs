use std::io::{self, Write};

use chrono::Utc;

use crate::cli::{Cli, Commands};
use crate::core::Evaluation;
use crate::error::AppError;
use crate::history::HistoryStore;
use crate::output::{evaluation_json, history_json, write_history, write_result};
use crate::session::{Recorded, Session};

fn handle_repl(session: &mut Session) -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn handle_eval(
    session: &mut Session,
    left: &str,
    op: &str,
    right: &str,
    json: bool,
) -> Result<(), AppError> {
    let evaluation = Evaluation::compute(left, right, op);
    let recorded = session.record(&evaluation, Utc::now());

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", evaluation_json(&evaluation)?)?;
    }

    match &recorded {
        Recorded::Invalid => {}
        Recorded::Saved { entry, rotated } => {
            if !json {
                write_result(&mut stdout, &entry.result)?;
            }
            if let Some(backup) = rotated {
                eprintln!("[history rotated to '{}']", backup.display());
            }
        }
        Recorded::Unsaved { entry, error } => {
            if !json {
                write_result(&mut stdout, &entry.result)?;
            }
            eprintln!("[warning] {error}");
        }
    }

    if let Some(backup) = session.finish() {
        eprintln!("[history rotated to '{}']", backup.display());
    }

    match recorded {
        Recorded::Invalid => Err(AppError::InvalidResult),
        _ => Ok(()),
    }
}

fn handle_history(session: &Session, json: bool) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", history_json(session.history())?)?;
    } else {
        write_history(&mut stdout, session.history())?;
    }
    Ok(())
}

/// Dispatch the parsed command against the configured history log
pub(crate) fn run(cli: Cli) -> Result<(), AppError> {
    let mut session = Session::open(HistoryStore::new(cli.history_path()));

    match cli.command {
        None | Some(Commands::Repl) => handle_repl(&mut session),
        Some(Commands::Eval { left, op, right }) => {
            handle_eval(&mut session, &left, &op, right.as_deref().unwrap_or(""), cli.json)
        }
        Some(Commands::History) => handle_history(&session, cli.json),
    }
}
