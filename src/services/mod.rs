// VaultView services
// Services implement the user-facing vault operations over the backend channel and the managers.

pub mod clipboard_action;
pub mod generator;
pub mod strength_classifier;
pub mod vault_synchronizer;
