// VaultView shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod generator;
pub mod notification;
pub mod password;
pub mod strength;
