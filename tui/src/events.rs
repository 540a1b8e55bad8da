use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::Message;
use crate::model::{Model, Popup, Screen};

/// Poll for one terminal event. `settings_open` mirrors the view model's
/// settings panel flag, which decides who owns the keyboard.
pub fn handle_event(
    model: &Model,
    settings_open: bool,
    poll_duration: std::time::Duration,
) -> Result<Option<Message>> {
    if !event::poll(poll_duration)? {
        return Ok(Some(Message::Tick));
    }
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            return Ok(handle_key(model, settings_open, key));
        }
    }
    Ok(None)
}

fn handle_key(model: &Model, settings_open: bool, key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }
    let code = key.code;
    match model.ui.popup {
        Popup::Keybinds => handle_keybinds_key(code),
        Popup::None if settings_open => handle_settings_key(code),
        Popup::None if model.ui.search_active => handle_search_key(code),
        Popup::None => match model.ui.screen {
            Screen::List => handle_list_key(code),
            Screen::Detail => handle_detail_key(code),
        },
    }
}

fn handle_keybinds_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc | KeyCode::Char('?') => Some(Message::ClosePopup),
        _ => None,
    }
}

fn handle_settings_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc | KeyCode::Char('s') => Some(Message::CloseSettings),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::SettingsNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::SettingsPrevious),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::SettingsSelect),
        _ => None,
    }
}

fn handle_search_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc => Some(Message::CancelSearch),
        KeyCode::Enter => Some(Message::ConfirmSearch),
        KeyCode::Backspace => Some(Message::SearchPop),
        KeyCode::Down => Some(Message::SelectNext),
        KeyCode::Up => Some(Message::SelectPrevious),
        KeyCode::Char(c) => Some(Message::SearchPush(c)),
        _ => None,
    }
}

fn handle_list_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::ClearSearch),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::SelectPrevious),
        KeyCode::Enter => Some(Message::OpenSelected),
        KeyCode::Char('/') | KeyCode::Char('f') => Some(Message::StartSearch),
        KeyCode::Char('s') => Some(Message::OpenSettings),
        KeyCode::Char('r') => Some(Message::RequestRefresh),
        KeyCode::Char('?') => Some(Message::OpenKeybinds),
        _ => None,
    }
}

fn handle_detail_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Some(Message::Back),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::SelectPrevious),
        KeyCode::Char('o') => Some(Message::OpenImage),
        KeyCode::Char('?') => Some(Message::OpenKeybinds),
        _ => None,
    }
}
