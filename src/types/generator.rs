use serde::{Deserialize, Serialize};

/// Parameters for a password generation request.
///
/// `None` at the call sites that take `Option<GeneratorConfig>` means "use
/// whatever defaults the backend currently holds". The client does not
/// validate charset combinations (an all-false selection included); whether
/// such a config is usable is the backend's call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Requested password length. Must be positive.
    pub length: usize,
    pub letters: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl GeneratorConfig {
    /// Config with the given length and every character class enabled.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            letters: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(16)
    }
}
