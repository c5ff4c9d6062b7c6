//! Unit tests for the shared error types.
//!
//! Verifies Display formatting and std::error::Error conformance.

use std::error::Error;

use vaultview::types::errors::{BackendError, ClipboardError};

// ─── BackendError ───

#[test]
fn test_backend_error_display() {
    assert_eq!(
        BackendError::Transport("pipe closed".to_string()).to_string(),
        "Backend transport error: pipe closed"
    );
    assert_eq!(
        BackendError::Protocol("not json".to_string()).to_string(),
        "Backend protocol error: not json"
    );
    assert_eq!(
        BackendError::Rejected("unauthorized".to_string()).to_string(),
        "Backend rejected request: unauthorized"
    );
}

#[test]
fn test_backend_error_is_std_error() {
    let err: Box<dyn Error> = Box::new(BackendError::Transport("io".to_string()));
    assert!(err.source().is_none());
}

#[test]
fn test_backend_error_equality() {
    assert_eq!(
        BackendError::Rejected("x".to_string()),
        BackendError::Rejected("x".to_string())
    );
    assert_ne!(
        BackendError::Rejected("x".to_string()),
        BackendError::Transport("x".to_string())
    );
}

// ─── ClipboardError ───

#[test]
fn test_clipboard_error_display() {
    assert_eq!(
        ClipboardError::Unavailable("no display".to_string()).to_string(),
        "Clipboard unavailable: no display"
    );
    assert_eq!(
        ClipboardError::WriteFailed("denied".to_string()).to_string(),
        "Clipboard write failed: denied"
    );
    assert_eq!(ClipboardError::Empty.to_string(), "Nothing to copy");
}

#[test]
fn test_clipboard_error_is_std_error() {
    let err: Box<dyn Error> = Box::new(ClipboardError::Empty);
    assert!(err.source().is_none());
}
