use crate::actions::Action;
use crate::message::Message;
use crate::viewmodel::RestaurantListViewModel;

/// Tracks the view model between ticks so the event loop can react to
/// what happened in the background.
pub struct TaskWatcher {
    seen_loads: u64,
}

impl TaskWatcher {
    pub fn new(view_model: &RestaurantListViewModel) -> Self {
        Self {
            seen_loads: view_model.list_state().loads_completed,
        }
    }

    /// Drain pending one-shot actions and report fetches that settled since
    /// the last call, however short they were.
    pub fn check(&mut self, view_model: &RestaurantListViewModel) -> Vec<Message> {
        let mut messages = Vec::new();

        while let Some(action) = view_model.actions().try_recv() {
            match action {
                Action::ShowSnackbar(text) => messages.push(Message::ShowSnackbar(text)),
            }
        }

        let loads = view_model.list_state().loads_completed;
        if loads != self.seen_loads {
            self.seen_loads = loads;
            messages.push(Message::LoadFinished);
        }

        messages
    }
}
