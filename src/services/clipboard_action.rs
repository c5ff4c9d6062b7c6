//! The "copy password" user action.
//!
//! Combines the clipboard write with guaranteed user feedback: the action
//! never returns an error, every outcome becomes a notification.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::managers::notification_center::NotificationCenterTrait;
use crate::types::errors::ClipboardError;
use crate::types::notification::{NotificationColor, NotificationMessage};
use crate::types::password::Password;

/// Trait defining the clipboard write seam.
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Copies passwords to the clipboard and notifies the user.
pub struct ClipboardAction {
    clipboard: Mutex<Box<dyn Clipboard>>,
    notifications: Arc<dyn NotificationCenterTrait>,
}

impl ClipboardAction {
    pub fn new(
        clipboard: Box<dyn Clipboard>,
        notifications: Arc<dyn NotificationCenterTrait>,
    ) -> Self {
        Self {
            clipboard: Mutex::new(clipboard),
            notifications,
        }
    }

    /// Copies the record's cleartext to the clipboard.
    ///
    /// Emits exactly one notification per call: a success message on a
    /// completed write, otherwise the "Password is empty" error. That error
    /// text is shown for every failure cause, not only an actually empty
    /// value; the UI has always worded it that way.
    ///
    /// Calling again simply re-attempts the copy.
    pub fn copy_password(&self, password: &Password) {
        let outcome = if password.password.is_empty() {
            Err(ClipboardError::Empty)
        } else {
            self.clipboard.lock().set_text(&password.password)
        };

        match outcome {
            Ok(()) => self.notifications.emit(
                NotificationMessage::new("Password copied")
                    .with_color(NotificationColor::Success)
                    .outlined(),
            ),
            Err(_) => self.notifications.emit(
                NotificationMessage::new("Password is empty")
                    .with_color(NotificationColor::Error),
            ),
        }
    }
}
