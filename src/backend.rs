//! Backend command boundary.
//!
//! The vault backend is a trusted local process reached through an opaque
//! request/response channel; this module defines the client-side contract.
//! Every call may fail with an opaque error and reads are safe to retry,
//! nothing more is assumed.

use async_trait::async_trait;
use serde_json::Value;

use crate::types::errors::BackendError;
use crate::types::generator::GeneratorConfig;
use crate::types::password::Password;

/// Command names understood by the backend.
pub mod commands {
    pub const GENERATE_PASSWORD: &str = "generate_password";
    pub const PASSWORD_STRENGTH: &str = "password_strength";
    pub const GET_PASSWORDS: &str = "get_passwords";
    pub const GET_GENERATOR: &str = "get_generator";
    pub const ANALYSE: &str = "analyse";
    pub const UPDATE_GENERATOR: &str = "update_generator";
    pub const NEW_PASSWORD: &str = "new_password";
    pub const UPDATE_PASSWORD: &str = "update_password";
    pub const DELETE_PASSWORD: &str = "delete_password";
}

/// Async request/response interface to the vault backend.
///
/// `generator: None` in [`generate_password`](VaultBackend::generate_password)
/// means "use the backend's stored defaults"; the config is otherwise handed
/// over unmodified.
#[async_trait]
pub trait VaultBackend: Send + Sync {
    async fn generate_password(
        &self,
        generator: Option<&GeneratorConfig>,
    ) -> Result<String, BackendError>;

    async fn password_strength(&self, password: &str) -> Result<i64, BackendError>;

    async fn get_passwords(&self) -> Result<Vec<Password>, BackendError>;

    async fn get_generator(&self) -> Result<GeneratorConfig, BackendError>;

    /// Vault-wide analytics (reuse, per-strength grouping). The client keeps
    /// the result opaque.
    async fn analyse(&self) -> Result<Value, BackendError>;

    async fn update_generator(&self, generator: &GeneratorConfig) -> Result<(), BackendError>;

    async fn new_password(&self) -> Result<Password, BackendError>;

    async fn update_password(&self, data: &Password) -> Result<(), BackendError>;

    async fn delete_password(&self, data: &Password) -> Result<(), BackendError>;
}
