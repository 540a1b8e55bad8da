use std::sync::{Mutex, MutexGuard};

use tokio::sync::Notify;

/// Transient, at-most-once notifications for the view layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowSnackbar(String),
}

/// Single-slot mailbox for [`Action`]s.
///
/// Holds at most one undelivered action. Emitting while one is pending drops
/// the older action. Receiving takes the action out, so it is delivered once.
#[derive(Debug, Default)]
pub struct ActionMailbox {
    slot: Mutex<Option<Action>>,
    notify: Notify,
}

impl ActionMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, action: Action) {
        if let Some(dropped) = self.lock().replace(action) {
            tracing::debug!(?dropped, "unconsumed action overwritten");
        }
        self.notify.notify_one();
    }

    pub fn try_recv(&self) -> Option<Action> {
        self.lock().take()
    }

    /// Waits for the next action. Only one consumer is expected at a time.
    pub async fn recv(&self) -> Action {
        loop {
            if let Some(action) = self.try_recv() {
                return action;
            }
            self.notify.notified().await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Action>> {
        // A poisoned lock still holds a whole Option.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
