use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid result (NaN or infinity). Check the operands and the operation.")]
    InvalidResult,

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Append failures. Callers report these as warnings and keep going.
#[derive(Debug, Error)]
pub(crate) enum HistoryError {
    #[error("could not write to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_invalid_result() {
        assert_eq!(
            AppError::InvalidResult.to_string(),
            "Invalid result (NaN or infinity). Check the operands and the operation."
        );
    }

    #[test]
    fn app_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let app: AppError = io.into();
        assert_eq!(app.to_string(), "Terminal I/O failed: pipe closed");
    }

    #[test]
    fn history_error_mentions_path_and_cause() {
        let e = HistoryError::Write {
            path: PathBuf::from("history.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "could not write to history.txt: denied");
    }
}
