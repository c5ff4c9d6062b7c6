use parking_lot::Mutex;

use crate::types::notification::NotificationMessage;

/// Snapshot of the notification slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationSlot {
    pub active: bool,
    pub message: NotificationMessage,
}

/// Trait defining the notification bus interface.
pub trait NotificationCenterTrait: Send + Sync {
    fn emit(&self, message: NotificationMessage);
    fn dismiss(&self);
    fn is_active(&self) -> bool;
    fn current(&self) -> NotificationMessage;
    fn snapshot(&self) -> NotificationSlot;
}

/// Single-slot transient message bus.
///
/// The newest `emit` always wins: the slot is overwritten even if the
/// previous message was never observed. There is no queue and no priority.
/// `dismiss` only clears the active flag; the message stays in the slot and
/// reappears if something re-activates it. That carry-over is intentional.
#[derive(Default)]
pub struct NotificationCenter {
    slot: Mutex<NotificationSlot>,
}

impl NotificationCenter {
    /// Inactive slot holding the default (empty, primary) message.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationCenterTrait for NotificationCenter {
    fn emit(&self, message: NotificationMessage) {
        let mut slot = self.slot.lock();
        slot.message = message;
        slot.active = true;
    }

    fn dismiss(&self) {
        self.slot.lock().active = false;
    }

    fn is_active(&self) -> bool {
        self.slot.lock().active
    }

    fn current(&self) -> NotificationMessage {
        self.slot.lock().message.clone()
    }

    fn snapshot(&self) -> NotificationSlot {
        self.slot.lock().clone()
    }
}
