use std::fmt;

/// Qualitative password strength label.
///
/// The vocabulary is fixed: five score buckets, `Blank` for empty input that
/// never reaches the scorer, and `Error` for anything outside the known
/// score range (including a failed scoring request).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    Blank,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    Error,
}

impl StrengthLabel {
    /// Total mapping from a backend strength score to a label.
    ///
    /// Scores 0 through 4 map to the five buckets; every other integer maps
    /// to `Error` rather than panicking.
    pub fn from_score(score: i64) -> Self {
        match score {
            0 => StrengthLabel::VeryWeak,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Medium,
            3 => StrengthLabel::Strong,
            4 => StrengthLabel::VeryStrong,
            _ => StrengthLabel::Error,
        }
    }

    /// The user-facing text for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Blank => "Blank",
            StrengthLabel::VeryWeak => "Very weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very strong",
            StrengthLabel::Error => "Error",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
