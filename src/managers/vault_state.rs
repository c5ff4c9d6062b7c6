use parking_lot::RwLock;
use serde_json::Value;

use crate::types::generator::GeneratorConfig;
use crate::types::password::Password;

/// Trait defining read/replace access to the cached vault view.
pub trait VaultStateTrait {
    fn passwords(&self) -> Vec<Password>;
    fn set_passwords(&self, passwords: Vec<Password>);
    fn current_password(&self) -> Option<Password>;
    fn select_password(&self, password: Option<Password>);
    fn generator_defaults(&self) -> Option<GeneratorConfig>;
    fn set_generator_defaults(&self, generator: GeneratorConfig);
    fn analytics(&self) -> Option<Value>;
    fn set_analytics(&self, analytics: Value);
}

/// The client's cached view of the backend's vault.
///
/// Each field sits behind its own lock: concurrent operations may replace
/// different fields at the same time, while a single field replacement is
/// one atomic assignment. No field is ever merged or patched; a setter
/// replaces the whole value with what the backend returned.
///
/// `current_password` is set only by explicit user selection, never by a
/// synchronization pass.
#[derive(Default)]
pub struct VaultState {
    passwords: RwLock<Vec<Password>>,
    current_password: RwLock<Option<Password>>,
    generator_defaults: RwLock<Option<GeneratorConfig>>,
    analytics: RwLock<Option<Value>>,
}

impl VaultState {
    /// Empty state, as at session start: no passwords, nothing selected,
    /// no generator defaults, no analytics.
    pub fn new() -> Self {
        Self::default()
    }
}

impl VaultStateTrait for VaultState {
    fn passwords(&self) -> Vec<Password> {
        self.passwords.read().clone()
    }

    fn set_passwords(&self, passwords: Vec<Password>) {
        *self.passwords.write() = passwords;
    }

    fn current_password(&self) -> Option<Password> {
        self.current_password.read().clone()
    }

    fn select_password(&self, password: Option<Password>) {
        *self.current_password.write() = password;
    }

    fn generator_defaults(&self) -> Option<GeneratorConfig> {
        self.generator_defaults.read().clone()
    }

    fn set_generator_defaults(&self, generator: GeneratorConfig) {
        *self.generator_defaults.write() = Some(generator);
    }

    fn analytics(&self) -> Option<Value> {
        self.analytics.read().clone()
    }

    fn set_analytics(&self, analytics: Value) {
        *self.analytics.write() = Some(analytics);
    }
}
