//! VaultView demo binary.
//!
//! Spawns the backend named by `VAULTVIEW_BACKEND` (program plus arguments,
//! whitespace separated), runs one synchronization pass and prints a short
//! vault summary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vaultview::app::App;
use vaultview::managers::notification_center::NotificationCenterTrait;
use vaultview::managers::vault_state::VaultStateTrait;
use vaultview::rpc_client::RpcClient;
use vaultview::services::clipboard_action::SystemClipboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend_cmd = std::env::var("VAULTVIEW_BACKEND")
        .map_err(|_| "VAULTVIEW_BACKEND is not set (expected: backend program + args)")?;
    let mut parts = backend_cmd.split_whitespace().map(str::to_string);
    let program = parts.next().ok_or("VAULTVIEW_BACKEND is empty")?;
    let args: Vec<String> = parts.collect();

    let backend = Arc::new(RpcClient::spawn(&program, &args).await?);
    let clipboard = SystemClipboard::new()?;
    let app = App::new(backend, Box::new(clipboard));

    let report = app.startup().await;
    if let Some(error) = report.first_error() {
        eprintln!("partial sync: {}", error);
    }

    let passwords = app.state.passwords();
    println!("{} password(s) in the vault", passwords.len());
    if let Some(defaults) = app.state.generator_defaults() {
        println!(
            "generator defaults: length {}, letters {}, numbers {}, symbols {}",
            defaults.length, defaults.letters, defaults.numbers, defaults.symbols
        );
    }
    if let Some(analytics) = app.state.analytics() {
        println!("analytics: {}", analytics);
    }

    let generated = app.generator.generate(None).await?;
    let label = app.classifier.classify(&generated).await;
    println!("freshly generated password scores: {}", label);

    if let Some(first) = passwords.first() {
        app.clipboard.copy_password(first);
        let slot = app.notifications.snapshot();
        println!("copy feedback: {}", slot.message.text);
    }

    Ok(())
}
