//! Interactive session state and the menu loop
//!
//! A [`Session`] owns the history store and the lines loaded from it at
//! start. Lines appended during the session are mirrored in memory; the
//! list is never re-read from disk.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{Evaluation, Operation};
use crate::error::{AppError, HistoryError};
use crate::history::{HistoryEntry, HistoryFs, HistoryStore, OsFs};
use crate::output::{MENU, write_history, write_result};

/// What happened to one evaluation
#[derive(Debug)]
pub(crate) enum Recorded {
    /// NaN or infinite; nothing kept
    Invalid,
    Saved {
        entry: HistoryEntry,
        rotated: Option<PathBuf>,
    },
    /// Kept in memory only
    Unsaved {
        entry: HistoryEntry,
        error: HistoryError,
    },
}

pub(crate) struct Session<F: HistoryFs = OsFs> {
    store: HistoryStore<F>,
    history: Vec<String>,
}

impl<F: HistoryFs> Session<F> {
    pub(crate) fn open(store: HistoryStore<F>) -> Self {
        let history = store.load();
        debug!(path = %store.path().display(), lines = history.len(), "history loaded");
        Self { store, history }
    }

    pub(crate) fn history(&self) -> &[String] {
        &self.history
    }

    /// Keep a valid evaluation in memory and append it to the log
    pub(crate) fn record(&mut self, evaluation: &Evaluation, now: DateTime<Utc>) -> Recorded {
        let Some(entry) = HistoryEntry::from_evaluation(evaluation, now) else {
            return Recorded::Invalid;
        };
        let line = entry.to_string();
        let appended = self.store.append(&line);
        self.history.push(line);
        match appended {
            Ok(rotated) => Recorded::Saved { entry, rotated },
            Err(error) => Recorded::Unsaved { entry, error },
        }
    }

    /// Final best-effort rotation check
    pub(crate) fn finish(&self) -> Option<PathBuf> {
        self.store.rotate_if_needed()
    }

    /// Run the menu until "0" or end of input
    pub(crate) fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "calclog - one operation at a time")?;
        writeln!(out, "{MENU}")?;

        loop {
            let Some(choice) = prompt(input, out, "opt: ")? else {
                break;
            };
            let choice = choice.trim();
            match choice {
                "" => continue,
                "0" => break,
                "8" => write_history(out, &self.history)?,
                _ => {
                    let Some(op) = Operation::from_menu_choice(choice) else {
                        writeln!(out, "Invalid option.")?;
                        continue;
                    };
                    let Some(left) = prompt(input, out, "a: ")? else {
                        break;
                    };
                    let right = if op.is_unary() {
                        "0".to_string()
                    } else {
                        match prompt(input, out, "b: ")? {
                            Some(right) => right,
                            None => break,
                        }
                    };
                    let evaluation = Evaluation::compute(&left, &right, op.symbol());
                    let recorded = self.record(&evaluation, Utc::now());
                    report(out, &recorded)?;
                }
            }
        }

        writeln!(out, "Bye.")?;
        if let Some(backup) = self.finish() {
            writeln!(out, "[history rotated to '{}']", backup.display())?;
        }
        Ok(())
    }
}

/// Print the outcome of one request the way the menu shows it
pub(crate) fn report(out: &mut impl Write, recorded: &Recorded) -> io::Result<()> {
    match recorded {
        Recorded::Invalid => writeln!(out, "{}", AppError::InvalidResult),
        Recorded::Saved { entry, rotated } => {
            write_result(out, &entry.result)?;
            if let Some(backup) = rotated {
                writeln!(out, "[history rotated to '{}']", backup.display())?;
            }
            Ok(())
        }
        Recorded::Unsaved { entry, error } => {
            write_result(out, &entry.result)?;
            writeln!(out, "[warning] {error}")
        }
    }
}

/// Write a prompt and read one line without its line terminator.
/// `None` at end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}
