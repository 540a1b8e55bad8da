use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::styles::*;
use crate::model::Model;
use crate::state::DetailViewState;
use eatclub_core::models::Deal;

pub fn render_restaurant_detail(
    frame: &mut Frame,
    model: &mut Model,
    state: &DetailViewState,
    area: Rect,
) {
    let Some(restaurant) = state.restaurant.as_ref() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(RED_PRIMARY))
            .title(build_title("Restaurant", RED_PRIMARY, TEXT_PRIMARY));
        let padding = vertical_padding(area.height, 1);
        let empty = Paragraph::new(format!("{}No restaurant selected", padding))
            .alignment(Alignment::Center)
            .style(Style::default().fg(TEXT_SECONDARY))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    // Header: name, cuisines, hours, address
    let mut lines = vec![Line::from(Span::styled(
        restaurant.name.clone(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))];
    if !restaurant.cuisines.is_empty() {
        lines.push(Line::from(Span::styled(
            restaurant.cuisine_line(" • "),
            Style::default().fg(RED_LIGHT),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Hours: ", Style::default().fg(RED_LIGHT)),
        Span::styled(restaurant.hours_label(), Style::default().fg(TEXT_SECONDARY)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Address: ", Style::default().fg(RED_LIGHT)),
        Span::styled(restaurant.address_line(), Style::default().fg(TEXT_SECONDARY)),
    ]));

    let mut footer = vec![Span::styled("┘", Style::default().fg(RED_PRIMARY))];
    footer.push(Span::styled("Esc", Style::default().fg(SHORTCUT_KEY)));
    footer.push(Span::styled(" back", Style::default().fg(TEXT_PRIMARY)));
    if !restaurant.image_link.is_empty() {
        footer.push(Span::styled("└┘", Style::default().fg(RED_PRIMARY)));
        footer.push(Span::styled("o", Style::default().fg(SHORTCUT_KEY)));
        footer.push(Span::styled("pen image", Style::default().fg(TEXT_PRIMARY)));
    }
    footer.push(Span::styled("└", Style::default().fg(RED_PRIMARY)));

    let header = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(RED_PRIMARY))
            .title(build_title("Restaurant", RED_PRIMARY, TEXT_PRIMARY))
            .title_bottom(Line::from(footer)),
    );
    frame.render_widget(header, chunks[0]);

    render_deals(frame, model, &state.deals, chunks[1]);
}

fn render_deals(frame: &mut Frame, model: &mut Model, deals: &[Deal], area: Rect) {
    let title = build_title(&format!("Deals [{}]", deals.len()), RED_PRIMARY, TEXT_PRIMARY);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(RED_PRIMARY))
        .title(title);

    if deals.is_empty() {
        let padding = vertical_padding(area.height, 1);
        let empty = Paragraph::new(format!("{}No deals today", padding))
            .alignment(Alignment::Center)
            .style(Style::default().fg(TEXT_SECONDARY))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = deals.iter().map(deal_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(BG_HIGHLIGHT))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut model.ui.deals_state);
}

fn deal_item(deal: &Deal) -> ListItem<'static> {
    let mut headline = Vec::new();
    if deal.is_lightning() {
        headline.push(Span::styled(
            "⚡ ",
            Style::default().fg(LIGHTNING_ORANGE),
        ));
    }
    headline.push(Span::styled(
        format!("{}% Off", deal.discount),
        Style::default()
            .fg(if deal.is_lightning() {
                LIGHTNING_ORANGE
            } else {
                RED_PRIMARY
            })
            .add_modifier(Modifier::BOLD),
    ));

    let service_color = if deal.dine_in {
        ACCENT_GREEN
    } else {
        TEXT_SECONDARY
    };
    let details = Line::from(vec![
        Span::styled(deal.time_window_label(), Style::default().fg(TEXT_SECONDARY)),
        Span::styled("  ·  ", Style::default().fg(TEXT_DIMMED)),
        Span::styled(
            format!("{} Deals Left", deal.qty_left),
            Style::default().fg(TEXT_PRIMARY),
        ),
        Span::styled("  ·  ", Style::default().fg(TEXT_DIMMED)),
        Span::styled(
            deal.service_label().to_string(),
            Style::default().fg(service_color),
        ),
    ]);

    ListItem::new(vec![Line::from(headline), details, Line::from("")])
}
