//! App core for VaultView.
//!
//! Central struct holding the session state and the services built over it,
//! wired to one backend channel. Constructed once per UI session; dropping
//! it tears the whole client state down.

use std::sync::Arc;

use crate::backend::VaultBackend;
use crate::managers::notification_center::NotificationCenter;
use crate::managers::vault_state::{VaultState, VaultStateTrait};
use crate::services::clipboard_action::{Clipboard, ClipboardAction};
use crate::services::generator::GeneratorService;
use crate::services::strength_classifier::StrengthClassifier;
use crate::services::vault_synchronizer::{SyncReport, VaultSynchronizer};
use crate::types::errors::BackendError;
use crate::types::password::Password;

/// Central application struct.
///
/// `state` and `notifications` are the session-wide singletons; everything
/// that needs them receives a handle at construction instead of reaching
/// for globals.
pub struct App {
    pub backend: Arc<dyn VaultBackend>,
    pub state: Arc<VaultState>,
    pub notifications: Arc<NotificationCenter>,
    pub synchronizer: VaultSynchronizer,
    pub classifier: StrengthClassifier,
    pub generator: GeneratorService,
    pub clipboard: ClipboardAction,
}

impl App {
    pub fn new(backend: Arc<dyn VaultBackend>, clipboard: Box<dyn Clipboard>) -> Self {
        let state = Arc::new(VaultState::new());
        let notifications = Arc::new(NotificationCenter::new());

        let synchronizer = VaultSynchronizer::new(backend.clone(), state.clone());
        let classifier = StrengthClassifier::new(backend.clone());
        let generator = GeneratorService::new(backend.clone(), state.clone());
        let clipboard = ClipboardAction::new(clipboard, notifications.clone());

        Self {
            backend,
            state,
            notifications,
            synchronizer,
            classifier,
            generator,
            clipboard,
        }
    }

    /// Initial population of the vault state.
    pub async fn startup(&self) -> SyncReport {
        self.synchronizer.fetch_data().await
    }

    /// Explicit user selection; synchronization never touches this field.
    pub fn select_password(&self, password: Option<Password>) {
        self.state.select_password(password);
    }

    /// Creates an empty password record, then refreshes the cached list.
    pub async fn create_password(&self) -> Result<Password, BackendError> {
        let created = self.backend.new_password().await?;
        self.synchronizer.fetch_data().await;
        Ok(created)
    }

    /// Writes an edited record back, then refreshes the cached list.
    pub async fn save_password(&self, data: &Password) -> Result<(), BackendError> {
        self.backend.update_password(data).await?;
        self.synchronizer.fetch_data().await;
        Ok(())
    }

    /// Deletes a record, then refreshes the cached list. A deleted record
    /// that is currently selected is deselected.
    pub async fn remove_password(&self, data: &Password) -> Result<(), BackendError> {
        self.backend.delete_password(data).await?;
        if self.state.current_password().as_ref() == Some(data) {
            self.state.select_password(None);
        }
        self.synchronizer.fetch_data().await;
        Ok(())
    }
}
