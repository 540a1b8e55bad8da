use eatclub_core::models::Restaurant;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

// EatClub palette, warm tones on a dark background
pub const RED_PRIMARY: Color = Color::Rgb(229, 62, 62); // Brand red - borders and badges
pub const RED_LIGHT: Color = Color::Rgb(255, 140, 130); // Titles and highlights
pub const SHORTCUT_KEY: Color = Color::Rgb(255, 200, 120); // Shortcut keys in status lines
pub const LIGHTNING_ORANGE: Color = Color::Rgb(255, 165, 60);
pub const ACCENT_GREEN: Color = Color::Rgb(150, 230, 150); // Check mark, dine-in
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_DIMMED: Color = Color::Rgb(90, 90, 90); // Background while a sheet is open
pub const BG_DARK: Color = Color::Rgb(22, 16, 16);
pub const BG_HIGHLIGHT: Color = Color::Rgb(70, 30, 30);
pub const BG_SNACKBAR: Color = Color::Rgb(50, 50, 50);

/// Build a title with btop-style brackets
pub fn build_title(text: &str, border_color: Color, title_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("┐", Style::default().fg(border_color)),
        Span::styled(text.to_string(), Style::default().fg(title_color)),
        Span::styled("┌", Style::default().fg(border_color)),
    ])
}

/// Calculate vertical padding to center text within an area
pub fn vertical_padding(area_height: u16, text_lines: u16) -> String {
    let inner_height = area_height.saturating_sub(2); // Account for borders
    let padding = inner_height.saturating_sub(text_lines) / 2;
    "\n".repeat(padding as usize)
}

/// Pick `color` unless the panel is dimmed
pub fn dim(color: Color, dimmed: bool) -> Color {
    if dimmed {
        TEXT_DIMMED
    } else {
        color
    }
}

/// Badge colour for a best-deal percentage
pub fn discount_color(discount: i32) -> Color {
    match discount {
        d if d >= 40 => RED_PRIMARY,
        d if d >= 20 => LIGHTNING_ORANGE,
        d if d > 0 => TEXT_SECONDARY,
        _ => TEXT_DIMMED,
    }
}

/// "{n}% off", or nothing for restaurants without deals
pub fn best_deal_badge(restaurant: &Restaurant) -> String {
    if restaurant.deals.is_empty() {
        String::new()
    } else {
        format!("{}% off", restaurant.best_deal_discount())
    }
}
