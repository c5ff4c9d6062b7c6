//! Unit tests for the App-level password operations.
//!
//! Uses a stub backend that records mutations and serves a mutable vault so
//! the create/save/remove flows can be checked end to end: each call hits
//! its backend command, refreshes the cached list on success, and skips the
//! refresh when the backend rejects the mutation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use vaultview::app::App;
use vaultview::backend::VaultBackend;
use vaultview::managers::vault_state::VaultStateTrait;
use vaultview::services::clipboard_action::Clipboard;
use vaultview::types::errors::{BackendError, ClipboardError};
use vaultview::types::generator::GeneratorConfig;
use vaultview::types::password::Password;

fn not_wired() -> BackendError {
    BackendError::Rejected("not wired in this test".to_string())
}

/// Clipboard stand-in; the copy action is not under test here.
struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

/// Stub backend with a mutable vault: mutations are recorded and applied,
/// reads serve the current vault content.
struct CrudBackend {
    passwords: Mutex<Vec<Password>>,
    fail_mutations: bool,
    new_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    list_calls: AtomicUsize,
    updated_with: Mutex<Vec<Password>>,
}

impl CrudBackend {
    fn new(fail_mutations: bool) -> Arc<Self> {
        Arc::new(Self {
            passwords: Mutex::new(vec![Password::with_secret("existing")]),
            fail_mutations,
            new_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            updated_with: Mutex::new(Vec::new()),
        })
    }

    fn reject_if_failing(&self) -> Result<(), BackendError> {
        if self.fail_mutations {
            return Err(BackendError::Rejected("vault locked".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl VaultBackend for CrudBackend {
    async fn generate_password(
        &self,
        _generator: Option<&GeneratorConfig>,
    ) -> Result<String, BackendError> {
        Err(not_wired())
    }

    async fn password_strength(&self, _password: &str) -> Result<i64, BackendError> {
        Err(not_wired())
    }

    async fn get_passwords(&self) -> Result<Vec<Password>, BackendError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.passwords.lock().clone())
    }

    async fn get_generator(&self) -> Result<GeneratorConfig, BackendError> {
        Ok(GeneratorConfig::new(16))
    }

    async fn analyse(&self) -> Result<Value, BackendError> {
        Ok(json!({"reused": []}))
    }

    async fn update_generator(&self, _generator: &GeneratorConfig) -> Result<(), BackendError> {
        Err(not_wired())
    }

    async fn new_password(&self) -> Result<Password, BackendError> {
        self.new_calls.fetch_add(1, Ordering::SeqCst);
        self.reject_if_failing()?;
        let created = Password::with_secret("");
        self.passwords.lock().push(created.clone());
        Ok(created)
    }

    async fn update_password(&self, data: &Password) -> Result<(), BackendError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.reject_if_failing()?;
        self.updated_with.lock().push(data.clone());
        Ok(())
    }

    async fn delete_password(&self, data: &Password) -> Result<(), BackendError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.reject_if_failing()?;
        self.passwords.lock().retain(|p| p != data);
        Ok(())
    }
}

fn setup(fail_mutations: bool) -> (App, Arc<CrudBackend>) {
    let backend = CrudBackend::new(fail_mutations);
    let app = App::new(backend.clone(), Box::new(NoopClipboard));
    (app, backend)
}

// ─── Create ───

#[tokio::test]
async fn test_create_password_refreshes_list() {
    let (app, backend) = setup(false);

    let created = app.create_password().await.unwrap();

    assert_eq!(created.password, "");
    assert_eq!(backend.new_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.list_calls.load(Ordering::SeqCst), 1);
    // The cache mirrors the backend after the refresh.
    assert_eq!(app.state.passwords().len(), 2);
}

#[tokio::test]
async fn test_create_password_failure_skips_refresh() {
    let (app, backend) = setup(true);

    let err = app.create_password().await.unwrap_err();

    assert_eq!(err, BackendError::Rejected("vault locked".to_string()));
    assert_eq!(backend.new_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.list_calls.load(Ordering::SeqCst), 0);
    assert!(app.state.passwords().is_empty());
}

// ─── Save ───

#[tokio::test]
async fn test_save_password_sends_record_and_refreshes() {
    let (app, backend) = setup(false);
    let edited = Password::with_secret("edited");

    app.save_password(&edited).await.unwrap();

    assert_eq!(backend.update_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.updated_with.lock().as_slice(), [edited]);
    assert_eq!(backend.list_calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.state.passwords().len(), 1);
}

#[tokio::test]
async fn test_save_password_failure_skips_refresh() {
    let (app, backend) = setup(true);

    let result = app.save_password(&Password::with_secret("edited")).await;

    assert!(result.is_err());
    assert_eq!(backend.list_calls.load(Ordering::SeqCst), 0);
    assert!(app.state.passwords().is_empty());
}

// ─── Remove ───

#[tokio::test]
async fn test_remove_password_refreshes_list() {
    let (app, backend) = setup(false);
    let doomed = Password::with_secret("existing");

    app.remove_password(&doomed).await.unwrap();

    assert_eq!(backend.delete_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.list_calls.load(Ordering::SeqCst), 1);
    assert!(app.state.passwords().is_empty());
}

#[tokio::test]
async fn test_remove_password_deselects_deleted_record() {
    let (app, _backend) = setup(false);
    let doomed = Password::with_secret("existing");
    app.select_password(Some(doomed.clone()));

    app.remove_password(&doomed).await.unwrap();

    // A selection cannot outlive its record.
    assert!(app.state.current_password().is_none());
}

#[tokio::test]
async fn test_remove_password_keeps_unrelated_selection() {
    let (app, _backend) = setup(false);
    app.select_password(Some(Password::with_secret("kept")));

    app.remove_password(&Password::with_secret("existing"))
        .await
        .unwrap();

    assert_eq!(app.state.current_password().unwrap().password, "kept");
}

#[tokio::test]
async fn test_remove_password_failure_skips_refresh_and_keeps_selection() {
    let (app, backend) = setup(true);
    let doomed = Password::with_secret("existing");
    app.select_password(Some(doomed.clone()));

    let result = app.remove_password(&doomed).await;

    assert!(result.is_err());
    assert_eq!(backend.list_calls.load(Ordering::SeqCst), 0);
    assert_eq!(app.state.current_password(), Some(doomed));
}
