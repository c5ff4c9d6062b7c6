//! VaultView — client core for a local password vault.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod backend;
pub mod managers;
pub mod rpc_client;
pub mod services;
pub mod types;
