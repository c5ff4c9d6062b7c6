//! Strength classification for stored and candidate passwords.
//!
//! The actual entropy scoring lives in the backend; this service turns its
//! integer score into the fixed label vocabulary and never fails outward.

use std::sync::Arc;

use crate::backend::VaultBackend;
use crate::types::strength::StrengthLabel;

/// Maps evaluation input to a qualitative strength label.
pub struct StrengthClassifier {
    backend: Arc<dyn VaultBackend>,
}

impl StrengthClassifier {
    pub fn new(backend: Arc<dyn VaultBackend>) -> Self {
        Self { backend }
    }

    /// Classifies a password, always returning a label.
    ///
    /// Empty input short-circuits to `Blank` without touching the backend;
    /// scoring an empty string is meaningless. Any scoring failure collapses
    /// into the terminal `Error` label, same as an out-of-range score.
    pub async fn classify(&self, password: &str) -> StrengthLabel {
        if password.is_empty() {
            return StrengthLabel::Blank;
        }
        match self.backend.password_strength(password).await {
            Ok(score) => StrengthLabel::from_score(score),
            Err(_) => StrengthLabel::Error,
        }
    }
}
