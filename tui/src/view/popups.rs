use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::styles::*;
use crate::model::{Model, Snackbar};
use crate::state::{ListViewState, SortOption};

/// Bottom sheet with the sort choices, the active one checked
pub fn render_settings_sheet(frame: &mut Frame, model: &Model, state: &ListViewState) {
    let area = frame.area();
    let sheet_width = area.width.min(50);
    let sheet_height = SortOption::ALL.len() as u16 + 4;
    let sheet_x = area.width.saturating_sub(sheet_width) / 2;
    let sheet_y = area.height.saturating_sub(sheet_height + 1);
    let sheet_area = Rect::new(sheet_x, sheet_y, sheet_width, sheet_height);

    frame.render_widget(Clear, sheet_area);

    let items: Vec<ListItem> = SortOption::ALL
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_cursor = i == model.ui.settings_index;
            let is_active = *option == state.sort_option;
            let mark = if is_active { "✓ " } else { "  " };
            let prefix = if is_cursor { "> " } else { "  " };
            let style = if is_cursor {
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(RED_LIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(option.name().to_string(), style),
                Span::styled(format!("  {}", mark), style.fg(ACCENT_GREEN)),
            ]))
        })
        .collect();

    let sheet = List::new(items).block(
        Block::default()
            .title(build_title("Settings", RED_PRIMARY, TEXT_PRIMARY))
            .title_bottom(Line::from(vec![
                Span::styled("┘", Style::default().fg(RED_PRIMARY)),
                Span::styled("Enter", Style::default().fg(SHORTCUT_KEY)),
                Span::styled(" apply ", Style::default().fg(TEXT_PRIMARY)),
                Span::styled("Esc", Style::default().fg(SHORTCUT_KEY)),
                Span::styled(" close", Style::default().fg(TEXT_PRIMARY)),
                Span::styled("└", Style::default().fg(RED_PRIMARY)),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(RED_PRIMARY)),
    );

    frame.render_widget(sheet, sheet_area);
}

pub fn render_keybinds_popup(frame: &mut Frame) {
    let area = frame.area();
    let popup_width = 45u16;
    let popup_height = 17u16;
    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = vec![
        "",
        "  [Up/Down] or [j/k]  Navigate",
        "  [Enter]             Open restaurant",
        "  [/] or [f]          Search",
        "  [Esc]               Clear search / Back",
        "  [s]                 Sort settings",
        "  [r]                 Refresh",
        "  [o]                 Open image (detail)",
        "  [?]                 This help",
        "  [q] or [Ctrl-C]     Quit",
        "",
        "  Search matches names and cuisines",
        "",
        "  [Esc] Close",
    ];

    let popup = Paragraph::new(content.join("\n"))
        .style(Style::default().fg(TEXT_PRIMARY))
        .block(
            Block::default()
                .title(Span::styled(" Keybinds ", Style::default().fg(RED_LIGHT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(RED_PRIMARY)),
        );

    frame.render_widget(popup, popup_area);
}

/// Transient message along the bottom edge
pub fn render_snackbar(frame: &mut Frame, snackbar: &Snackbar) {
    let area = frame.area();
    let width = (snackbar.message.chars().count() as u16 + 4).min(area.width);
    let height = 3u16.min(area.height);
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height + 1);
    let snackbar_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, snackbar_area);

    let widget = Paragraph::new(snackbar.message.clone())
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY).bg(BG_SNACKBAR))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(RED_LIGHT).bg(BG_SNACKBAR)),
        );

    frame.render_widget(widget, snackbar_area);
}
