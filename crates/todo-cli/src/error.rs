//! Error types for session and command handling.

use std::path::PathBuf;
use thiserror::Error;
use todo_models::Notice;
use todo_store::StoreError;

/// Errors that can occur while handling a todo command.
///
/// All of them are recoverable; the REPL reports them and keeps going.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The command line was empty.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// A todo was added with no text.
    #[error("todo text cannot be empty")]
    EmptyText,

    /// Remove index outside `[0, len)`.
    #[error("index {index} out of bounds for {len} todos")]
    OutOfBounds { index: i64, len: usize },

    /// Remove argument was not an integer.
    #[error("invalid index: {0:?}")]
    ParseIndex(String),

    /// First character matched no command.
    #[error("unknown command: {0:?}")]
    UnknownCommand(char),

    /// The store could not be read at startup, so saving would lose data.
    #[error("refusing to overwrite {path}: it could not be loaded")]
    LoadFailed { path: PathBuf },

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Converts the error into a user-facing notice.
    pub fn to_notice(&self) -> Notice {
        match self {
            SessionError::EmptyPrompt => Notice::error("PROMPT IS EMPTY"),
            SessionError::EmptyText => Notice::error("TEXT CANNOT BE EMPTY"),
            SessionError::OutOfBounds { .. } => Notice::error("OUT OF BOUNDS IDX"),
            SessionError::ParseIndex(raw) => Notice::error(format!("INVALID IDX: {:?}", raw)),
            SessionError::UnknownCommand(_) => Notice::error("UNKNOWN COMMAND"),
            SessionError::LoadFailed { .. } => {
                Notice::error("STORE COULD NOT BE LOADED, NOT SAVED")
            }
            SessionError::Store(e) => Notice::error(format!("STORAGE: {}", e)),
        }
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use todo_models::NoticeLevel;

    #[test]
    fn test_notices_are_errors() {
        let errors = [
            SessionError::EmptyPrompt,
            SessionError::EmptyText,
            SessionError::OutOfBounds { index: 3, len: 1 },
            SessionError::ParseIndex("abc".to_string()),
            SessionError::UnknownCommand('x'),
            SessionError::LoadFailed {
                path: PathBuf::from("store.txt"),
            },
        ];
        for err in &errors {
            assert_eq!(err.to_notice().level, NoticeLevel::Error);
        }
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            SessionError::OutOfBounds { index: -1, len: 0 }.to_notice().message,
            "OUT OF BOUNDS IDX"
        );
        assert_eq!(
            SessionError::ParseIndex("two".to_string()).to_notice().message,
            "INVALID IDX: \"two\""
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SessionError::OutOfBounds { index: 5, len: 2 }.to_string(),
            "index 5 out of bounds for 2 todos"
        );
        assert_eq!(
            SessionError::UnknownCommand('z').to_string(),
            "unknown command: 'z'"
        );
    }
}
