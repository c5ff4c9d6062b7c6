// VaultView state managers
// Managers own the session-scoped mutable state: the cached vault view and the notification slot.

pub mod notification_center;
pub mod vault_state;
