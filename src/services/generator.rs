//! Password generation contract.

use std::sync::Arc;

use crate::backend::VaultBackend;
use crate::managers::vault_state::{VaultState, VaultStateTrait};
use crate::types::errors::BackendError;
use crate::types::generator::GeneratorConfig;

/// Hands generation requests to the backend and manages the stored defaults.
pub struct GeneratorService {
    backend: Arc<dyn VaultBackend>,
    state: Arc<VaultState>,
}

impl GeneratorService {
    pub fn new(backend: Arc<dyn VaultBackend>, state: Arc<VaultState>) -> Self {
        Self { backend, state }
    }

    /// Generates a password.
    ///
    /// `None` asks the backend to use its stored defaults; a concrete config
    /// is passed through unmodified. The returned string is not inspected or
    /// validated locally, and a backend rejection (invalid config included)
    /// propagates as-is with no retry and no state side effects.
    pub async fn generate(
        &self,
        config: Option<&GeneratorConfig>,
    ) -> Result<String, BackendError> {
        self.backend.generate_password(config).await
    }

    /// Replaces the backend's stored generator defaults.
    ///
    /// On success the cached copy in [`VaultState`] is replaced as well, so
    /// the UI sees the new defaults without a full refresh.
    pub async fn update_defaults(&self, config: GeneratorConfig) -> Result<(), BackendError> {
        self.backend.update_generator(&config).await?;
        self.state.set_generator_defaults(config);
        Ok(())
    }
}
