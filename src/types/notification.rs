use serde::{Deserialize, Serialize};

/// Visual category of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationColor {
    Primary,
    Success,
    Error,
    Warning,
    Info,
}

/// A transient message destined for the UI's single notification surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub text: String,
    pub color: NotificationColor,
    pub outlined: bool,
}

impl NotificationMessage {
    /// Message with the default presentation: primary color, not outlined.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: NotificationColor::Primary,
            outlined: false,
        }
    }

    pub fn with_color(mut self, color: NotificationColor) -> Self {
        self.color = color;
        self
    }

    pub fn outlined(mut self) -> Self {
        self.outlined = true;
        self
    }
}

impl Default for NotificationMessage {
    fn default() -> Self {
        Self::new("")
    }
}
