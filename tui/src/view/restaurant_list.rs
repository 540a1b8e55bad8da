use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Table,
    },
    Frame,
};

use super::styles::*;
use crate::model::Model;
use crate::state::ListViewState;

pub fn render_restaurant_list(
    frame: &mut Frame,
    model: &mut Model,
    state: &ListViewState,
    area: Rect,
    dimmed: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_search_box(frame, model, state, chunks[0], dimmed);
    render_table(frame, model, state, chunks[1], dimmed);
}

fn render_search_box(
    frame: &mut Frame,
    model: &Model,
    state: &ListViewState,
    area: Rect,
    dimmed: bool,
) {
    let active = model.ui.search_active && !dimmed;
    let border_color = if active {
        RED_LIGHT
    } else {
        dim(RED_PRIMARY, dimmed)
    };
    let text_color = dim(TEXT_PRIMARY, dimmed);

    let mut spans = Vec::new();
    if state.search_query.is_empty() && !active {
        spans.push(Span::styled(
            "e.g. chinese, pizza",
            Style::default().fg(dim(TEXT_SECONDARY, dimmed)),
        ));
    } else {
        spans.push(Span::styled(
            state.search_query.clone(),
            Style::default().fg(text_color),
        ));
        if active {
            spans.push(Span::styled("_", Style::default().fg(text_color)));
        }
    }

    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(build_title("Search", border_color, dim(TEXT_PRIMARY, dimmed))),
    );
    frame.render_widget(search, area);
}

fn render_table(
    frame: &mut Frame,
    model: &mut Model,
    state: &ListViewState,
    area: Rect,
    dimmed: bool,
) {
    let text_color = dim(TEXT_PRIMARY, dimmed);
    let border_color = dim(RED_PRIMARY, dimmed);
    let secondary_color = dim(TEXT_SECONDARY, dimmed);

    let title = build_title("Restaurants", border_color, text_color);
    let status_line = build_status_line(state, dimmed);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_bottom(status_line);

    if state.is_loading && state.restaurants.is_empty() {
        let padding = vertical_padding(area.height, 1);
        let loading = Paragraph::new(format!(
            "{}{} Loading restaurants...",
            padding,
            model.spinner_char()
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(text_color))
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if state.filtered_restaurants.is_empty() {
        let message = if state.restaurants.is_empty() {
            "No restaurants available"
        } else {
            "No restaurants match your search"
        };
        let padding = vertical_padding(area.height, 1);
        let empty = Paragraph::new(format!("{}{}", padding, message))
            .alignment(Alignment::Center)
            .style(Style::default().fg(secondary_color))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Restaurant"),
        Cell::from("Best deal"),
        Cell::from("Cuisines"),
        Cell::from("Address"),
    ])
    .style(Style::default().fg(text_color).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .filtered_restaurants
        .iter()
        .map(|restaurant| {
            let best = restaurant.best_deal_discount();
            Row::new(vec![
                Cell::from(restaurant.name.clone()).style(Style::default().fg(text_color)),
                Cell::from(best_deal_badge(restaurant)).style(
                    Style::default()
                        .fg(dim(discount_color(best), dimmed))
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::from(restaurant.cuisine_line(", "))
                    .style(Style::default().fg(secondary_color)),
                Cell::from(restaurant.address_line()).style(Style::default().fg(secondary_color)),
            ])
        })
        .collect();

    let highlight_style = if dimmed {
        Style::default().fg(TEXT_DIMMED)
    } else {
        Style::default().bg(BG_HIGHLIGHT)
    };

    let total_items = state.filtered_restaurants.len();
    let selected = model.selected_index().min(total_items - 1);

    // Spinner replaces the padding while a refresh runs
    let suffix = if state.is_loading {
        model.spinner_char()
    } else {
        ' '
    };
    let counter = Span::styled(
        format!(" {}/{} {} ", selected + 1, total_items, suffix),
        Style::default().fg(text_color).add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Percentage(25),
        Constraint::Percentage(30),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title_bottom(Line::from(counter).alignment(Alignment::Right)))
        .row_highlight_style(highlight_style)
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut model.ui.table_state);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("█")
        .style(Style::default().fg(border_color))
        .begin_style(Style::default().fg(dim(SHORTCUT_KEY, dimmed)))
        .end_style(Style::default().fg(dim(SHORTCUT_KEY, dimmed)));

    let mut scrollbar_state = ScrollbarState::new(total_items).position(selected);

    let scrollbar_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

/// Build status bar line with btop-style highlighted shortcut keys and separators
fn build_status_line(state: &ListViewState, dimmed: bool) -> Line<'static> {
    let text_color = dim(TEXT_PRIMARY, dimmed);
    let shortcut_color = dim(SHORTCUT_KEY, dimmed);
    let border_color = dim(RED_PRIMARY, dimmed);

    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled("┘", Style::default().fg(border_color)));

    spans.push(Span::styled("/", Style::default().fg(shortcut_color)));
    spans.push(Span::styled("search", Style::default().fg(text_color)));

    spans.push(Span::styled("└┘", Style::default().fg(border_color)));

    spans.push(Span::styled("s", Style::default().fg(shortcut_color)));
    spans.push(Span::styled(
        format!("ettings[{}]", state.sort_option.name()),
        Style::default().fg(text_color),
    ));

    spans.push(Span::styled("└┘", Style::default().fg(border_color)));

    spans.push(Span::styled("r", Style::default().fg(shortcut_color)));
    spans.push(Span::styled("efresh", Style::default().fg(text_color)));

    spans.push(Span::styled("└┘", Style::default().fg(border_color)));

    spans.push(Span::styled("?", Style::default().fg(shortcut_color)));
    spans.push(Span::styled("keys", Style::default().fg(text_color)));

    spans.push(Span::styled("└", Style::default().fg(border_color)));

    Line::from(spans)
}
