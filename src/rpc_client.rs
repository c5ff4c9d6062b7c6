//! JSON-RPC client for the vault backend process.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"get_passwords", "params":{...}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! The backend announces itself with {"event":"ready", ...} on startup.
//!
//! Framing (`encode_request` / `parse_response`) is kept as pure functions so
//! it can be unit-tested without spawning a process.

use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;
use tracing::debug;

use crate::backend::{commands, VaultBackend};
use crate::types::errors::BackendError;
use crate::types::generator::GeneratorConfig;
use crate::types::password::Password;

/// Encode a request frame, newline terminator included.
pub fn encode_request(id: u64, method: &str, params: &Value) -> String {
    format!("{}\n", json!({"id": id, "method": method, "params": params}))
}

/// A decoded backend frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Out-of-band event such as the startup `ready` announcement.
    Event(String),
    /// Reply to a request, carrying either the result or the backend's
    /// error message.
    Reply {
        id: Option<u64>,
        outcome: Result<Value, String>,
    },
}

/// Decode a single response line.
pub fn parse_response(line: &str) -> Result<Frame, BackendError> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| BackendError::Protocol(format!("malformed frame: {}", e)))?;

    if let Some(event) = value.get("event").and_then(|v| v.as_str()) {
        return Ok(Frame::Event(event.to_string()));
    }

    let id = value.get("id").and_then(|v| v.as_u64());
    if let Some(error) = value.get("error").and_then(|v| v.as_str()) {
        return Ok(Frame::Reply {
            id,
            outcome: Err(error.to_string()),
        });
    }
    match value.get("result") {
        Some(result) => Ok(Frame::Reply {
            id,
            outcome: Ok(result.clone()),
        }),
        None => Err(BackendError::Protocol(
            "frame carries neither result nor error".to_string(),
        )),
    }
}

#[derive(Debug)]
struct Channel {
    // Held so the backend process lives as long as the client.
    _child: Child,
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
}

/// Command channel to a spawned backend process.
///
/// Calls are serialized: one request/response round trip holds the channel
/// lock, so concurrent callers queue up at the transport.
#[derive(Debug)]
pub struct RpcClient {
    channel: Mutex<Channel>,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Spawns the backend and waits for its `ready` announcement.
    pub async fn spawn(program: &str, args: &[String]) -> Result<Self, BackendError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| BackendError::Transport(format!("failed to spawn backend: {}", e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| BackendError::Transport("backend stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| BackendError::Transport("backend stdout unavailable".to_string()))?;
        let mut reader = BufReader::new(stdout);

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        if read == 0 {
            return Err(BackendError::Transport("backend closed the channel".to_string()));
        }
        match parse_response(line.trim())? {
            Frame::Event(event) if event == "ready" => {}
            other => {
                return Err(BackendError::Protocol(format!(
                    "expected ready announcement, got {:?}",
                    other
                )))
            }
        }

        Ok(Self {
            channel: Mutex::new(Channel {
                _child: child,
                stdin,
                reader,
            }),
            next_id: AtomicU64::new(1),
        })
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, BackendError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = encode_request(id, method, &params);
        debug!(method, id, "backend request");

        let mut channel = self.channel.lock().await;
        channel
            .stdin
            .write_all(request.as_bytes())
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        loop {
            let mut line = String::new();
            let read = channel
                .reader
                .read_line(&mut line)
                .await
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            if read == 0 {
                return Err(BackendError::Transport("backend closed the channel".to_string()));
            }
            if line.trim().is_empty() {
                continue;
            }
            match parse_response(line.trim())? {
                Frame::Event(_) => continue,
                Frame::Reply { id: reply_id, outcome } => {
                    // Calls are serialized, so a mismatched id is a stale
                    // frame from an earlier cancelled call; skip it.
                    if reply_id != Some(id) {
                        continue;
                    }
                    return outcome.map_err(BackendError::Rejected);
                }
            }
        }
    }

    async fn call_decoded<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, BackendError> {
        let value = self.call(method, params).await?;
        serde_json::from_value(value)
            .map_err(|e| BackendError::Protocol(format!("unexpected {} result: {}", method, e)))
    }
}

#[async_trait]
impl VaultBackend for RpcClient {
    async fn generate_password(
        &self,
        generator: Option<&GeneratorConfig>,
    ) -> Result<String, BackendError> {
        self.call_decoded(commands::GENERATE_PASSWORD, json!({ "generator": generator }))
            .await
    }

    async fn password_strength(&self, password: &str) -> Result<i64, BackendError> {
        self.call_decoded(commands::PASSWORD_STRENGTH, json!({ "password": password }))
            .await
    }

    async fn get_passwords(&self) -> Result<Vec<Password>, BackendError> {
        self.call_decoded(commands::GET_PASSWORDS, json!({})).await
    }

    async fn get_generator(&self) -> Result<GeneratorConfig, BackendError> {
        self.call_decoded(commands::GET_GENERATOR, json!({})).await
    }

    async fn analyse(&self) -> Result<Value, BackendError> {
        self.call(commands::ANALYSE, json!({})).await
    }

    async fn update_generator(&self, generator: &GeneratorConfig) -> Result<(), BackendError> {
        self.call(commands::UPDATE_GENERATOR, json!({ "generator": generator }))
            .await?;
        Ok(())
    }

    async fn new_password(&self) -> Result<Password, BackendError> {
        self.call_decoded(commands::NEW_PASSWORD, json!({})).await
    }

    async fn update_password(&self, data: &Password) -> Result<(), BackendError> {
        self.call(commands::UPDATE_PASSWORD, json!({ "data": data })).await?;
        Ok(())
    }

    async fn delete_password(&self, data: &Password) -> Result<(), BackendError> {
        self.call(commands::DELETE_PASSWORD, json!({ "data": data })).await?;
        Ok(())
    }
}
