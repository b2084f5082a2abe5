use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::consts::ENTRY_SEPARATOR;
use crate::core::{Evaluation, format_result};

/// One persisted computation.
///
/// Fields are written verbatim and never escaped; a separator inside the
/// operand text survives the round trip only because loaded lines are
/// displayed as-is and never split again.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HistoryEntry {
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) left: String,
    pub(crate) right: String,
    pub(crate) symbol: String,
    pub(crate) result: String,
}

impl HistoryEntry {
    /// Build an entry from a valid evaluation; invalid outcomes yield `None`.
    pub(crate) fn from_evaluation(
        evaluation: &Evaluation,
        timestamp: DateTime<Utc>,
    ) -> Option<Self> {
        let value = evaluation.outcome.value()?;
        Some(HistoryEntry {
            timestamp,
            left: evaluation.left.text.clone(),
            right: evaluation.right.text.clone(),
            symbol: evaluation.symbol.clone(),
            result: format_result(value),
        })
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true);
        write!(
            f,
            "{ts}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.left,
            self.right,
            self.symbol,
            self.result,
            sep = ENTRY_SEPARATOR
        )
    }
}
