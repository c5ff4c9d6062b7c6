//! Vault synchronization.
//!
//! One coordinated pass pulls the password list, the generator defaults and
//! the analytics snapshot from the backend and writes them into
//! [`VaultState`]. The three reads have no ordering dependency, so they run
//! as a concurrent join.

use std::sync::Arc;

use tracing::warn;

use crate::backend::VaultBackend;
use crate::managers::vault_state::{VaultState, VaultStateTrait};
use crate::types::errors::BackendError;

/// Per-field outcome of a synchronization pass.
///
/// A field is `None` when its fetch succeeded and the state was replaced.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub passwords: Option<BackendError>,
    pub generator: Option<BackendError>,
    pub analytics: Option<BackendError>,
}

impl SyncReport {
    /// True when all three fetches succeeded.
    pub fn is_complete(&self) -> bool {
        self.passwords.is_none() && self.generator.is_none() && self.analytics.is_none()
    }

    pub fn first_error(&self) -> Option<&BackendError> {
        self.passwords
            .as_ref()
            .or(self.generator.as_ref())
            .or(self.analytics.as_ref())
    }
}

/// Populates and refreshes [`VaultState`] from the backend.
pub struct VaultSynchronizer {
    backend: Arc<dyn VaultBackend>,
    state: Arc<VaultState>,
}

impl VaultSynchronizer {
    pub fn new(backend: Arc<dyn VaultBackend>, state: Arc<VaultState>) -> Self {
        Self { backend, state }
    }

    /// Runs the three fetches and replaces each state field wholesale on
    /// success.
    ///
    /// Failures are independent: a failed analytics fetch leaves already
    /// fetched passwords and generator defaults in place, and the failed
    /// field keeps its prior value. State writes happen only after a fetch
    /// completes, so cancelling the pass never leaves a half-written field.
    /// Repeated calls re-run all three; last successful fetch wins.
    pub async fn fetch_data(&self) -> SyncReport {
        let (passwords, generator, analytics) = tokio::join!(
            self.backend.get_passwords(),
            self.backend.get_generator(),
            self.backend.analyse(),
        );

        let mut report = SyncReport::default();

        match passwords {
            Ok(list) => self.state.set_passwords(list),
            Err(e) => {
                warn!(error = %e, "password list fetch failed");
                report.passwords = Some(e);
            }
        }
        match generator {
            Ok(config) => self.state.set_generator_defaults(config),
            Err(e) => {
                warn!(error = %e, "generator defaults fetch failed");
                report.generator = Some(e);
            }
        }
        match analytics {
            Ok(snapshot) => self.state.set_analytics(snapshot),
            Err(e) => {
                warn!(error = %e, "analytics fetch failed");
                report.analytics = Some(e);
            }
        }

        report
    }
}
