pub mod popups;
pub mod restaurant_detail;
pub mod restaurant_list;
pub mod styles;

use ratatui::{style::Style, widgets::Block, Frame};

use crate::model::{Model, Popup, Screen};
use crate::viewmodel::RestaurantListViewModel;
use styles::BG_DARK;

pub fn view(frame: &mut Frame, model: &mut Model, view_model: &RestaurantListViewModel) {
    let bg_block = Block::default().style(Style::default().bg(BG_DARK));
    frame.render_widget(bg_block, frame.area());

    let list = view_model.list_state();
    let area = frame.area();

    match model.ui.screen {
        Screen::List => {
            let dimmed = list.show_settings_panel || model.ui.popup != Popup::None;
            restaurant_list::render_restaurant_list(frame, model, &list, area, dimmed);
            if list.show_settings_panel {
                popups::render_settings_sheet(frame, model, &list);
            }
        }
        Screen::Detail => {
            let detail = view_model.detail_state();
            restaurant_detail::render_restaurant_detail(frame, model, &detail, area);
        }
    }

    if model.ui.popup == Popup::Keybinds {
        popups::render_keybinds_popup(frame);
    }

    if let Some(snackbar) = model.snackbar.as_ref() {
        popups::render_snackbar(frame, snackbar);
    }
}
