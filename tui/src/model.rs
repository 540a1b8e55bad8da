use ratatui::widgets::{ListState, TableState};
use std::time::{Duration, Instant};

// ── Enums ───────────────────────────────────────────────────────────────────

/// Screens the router can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

/// Overlays owned by the front-end. The settings sheet is not listed here:
/// its visibility lives in the view model's list state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Keybinds,
}

// ── Sub-states ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Snackbar {
    pub message: String,
    pub shown_at: Instant,
}

pub struct UiState {
    pub screen: Screen,
    pub popup: Popup,
    /// Keystrokes go to the search box
    pub search_active: bool,
    pub table_state: TableState,
    pub deals_state: ListState,
    pub settings_index: usize,
    pub spinner_frame: usize,
}

impl Default for UiState {
    fn default() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        let mut deals_state = ListState::default();
        deals_state.select(Some(0));
        Self {
            screen: Screen::List,
            popup: Popup::None,
            search_active: false,
            table_state,
            deals_state,
            settings_index: 0,
            spinner_frame: 0,
        }
    }
}

// ── Model ───────────────────────────────────────────────────────────────────

/// Front-end state that does not belong to the view model: cursor
/// positions, current screen, the snackbar being displayed.
pub struct Model {
    pub ui: UiState,
    pub snackbar: Option<Snackbar>,
    pub snackbar_duration: Duration,
    pub should_quit: bool,
}

impl Model {
    pub fn new(snackbar_duration: Duration) -> Self {
        Self {
            ui: UiState::default(),
            snackbar: None,
            snackbar_duration,
            should_quit: false,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.ui.table_state.selected().unwrap_or(0)
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.ui.table_state.select(index);
    }

    pub fn select_deal(&mut self, index: Option<usize>) {
        self.ui.deals_state.select(index);
    }

    /// Keep the list cursor inside `len` rows
    pub fn clamp_selection(&mut self, len: usize) {
        let selected = self.selected_index();
        if len == 0 {
            self.select(Some(0));
        } else if selected >= len {
            self.select(Some(len - 1));
        }
    }

    pub fn show_snackbar(&mut self, message: String, now: Instant) {
        self.snackbar = Some(Snackbar {
            message,
            shown_at: now,
        });
    }

    pub fn expire_snackbar(&mut self, now: Instant) {
        let expired = self
            .snackbar
            .as_ref()
            .is_some_and(|s| now.duration_since(s.shown_at) >= self.snackbar_duration);
        if expired {
            self.snackbar = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        SPINNER_FRAMES[self.ui.spinner_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snackbar_expires_after_duration() {
        let mut model = Model::new(Duration::from_millis(100));
        let start = Instant::now();
        model.show_snackbar("Something went wrong".to_string(), start);

        model.expire_snackbar(start + Duration::from_millis(99));
        assert!(model.snackbar.is_some());

        model.expire_snackbar(start + Duration::from_millis(100));
        assert!(model.snackbar.is_none());
    }

    #[test]
    fn clamp_selection_pulls_cursor_back_in_range() {
        let mut model = Model::new(Duration::from_secs(1));
        model.select(Some(7));
        model.clamp_selection(3);
        assert_eq!(model.selected_index(), 2);
        model.clamp_selection(0);
        assert_eq!(model.selected_index(), 0);
        model.select(Some(1));
        model.clamp_selection(5);
        assert_eq!(model.selected_index(), 1);
    }
}
