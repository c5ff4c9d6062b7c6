use std::fmt;

// === BackendError ===

/// Errors surfaced by the backend command channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The channel itself failed (spawn, I/O, closed pipe).
    Transport(String),
    /// The backend sent a frame the client could not interpret.
    Protocol(String),
    /// The backend processed the request and reported an error.
    Rejected(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Transport(msg) => write!(f, "Backend transport error: {}", msg),
            BackendError::Protocol(msg) => write!(f, "Backend protocol error: {}", msg),
            BackendError::Rejected(msg) => write!(f, "Backend rejected request: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

// === ClipboardError ===

/// Errors related to system clipboard access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The system clipboard could not be opened.
    Unavailable(String),
    /// Writing to the clipboard failed.
    WriteFailed(String),
    /// There was no text to copy.
    Empty,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
            ClipboardError::Empty => write!(f, "Nothing to copy"),
        }
    }
}

impl std::error::Error for ClipboardError {}
