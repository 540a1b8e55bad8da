use std::time::Instant;

use crate::actions::Action;
use crate::message::Message;
use crate::model::{Model, Popup, Screen};
use crate::state::SortOption;
use crate::viewmodel::RestaurantListViewModel;

/// Flags returned by update to signal side effects needed
pub struct UpdateResult {
    pub msg: Option<Message>,
    /// The router switched screens
    pub navigated: bool,
    /// A fetch just finished and the list was replaced
    pub list_refreshed: bool,
}

impl UpdateResult {
    fn none() -> Self {
        Self {
            msg: None,
            navigated: false,
            list_refreshed: false,
        }
    }

    fn with_navigation() -> Self {
        Self {
            msg: None,
            navigated: true,
            list_refreshed: false,
        }
    }

    fn with_list_refreshed() -> Self {
        Self {
            msg: None,
            navigated: false,
            list_refreshed: true,
        }
    }

    fn with_msg(msg: Message) -> Self {
        Self {
            msg: Some(msg),
            navigated: false,
            list_refreshed: false,
        }
    }
}

pub fn update(model: &mut Model, view_model: &RestaurantListViewModel, msg: Message) -> UpdateResult {
    match msg {
        // ── Navigation ──────────────────────────────────────────────────
        Message::SelectNext => {
            match model.ui.screen {
                Screen::List => {
                    let count = view_model.list_state().filtered_restaurants.len();
                    if count > 0 {
                        let i = (model.selected_index() + 1) % count;
                        model.select(Some(i));
                    }
                }
                Screen::Detail => {
                    let count = view_model.detail_state().deals.len();
                    if count > 0 {
                        let i = model.ui.deals_state.selected().map_or(0, |i| (i + 1) % count);
                        model.select_deal(Some(i));
                    }
                }
            }
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            match model.ui.screen {
                Screen::List => {
                    let count = view_model.list_state().filtered_restaurants.len();
                    if count > 0 {
                        let i = match model.selected_index() {
                            0 => count - 1,
                            i => (i - 1).min(count - 1),
                        };
                        model.select(Some(i));
                    }
                }
                Screen::Detail => {
                    let count = view_model.detail_state().deals.len();
                    if count > 0 {
                        let i = match model.ui.deals_state.selected() {
                            Some(0) | None => count - 1,
                            Some(i) => i - 1,
                        };
                        model.select_deal(Some(i));
                    }
                }
            }
            UpdateResult::none()
        }
        Message::OpenSelected => {
            if model.ui.screen != Screen::List {
                return UpdateResult::none();
            }
            let state = view_model.list_state();
            match state.filtered_restaurants.get(model.selected_index()) {
                Some(restaurant) => {
                    view_model.on_restaurant_selected(restaurant);
                    model.ui.screen = Screen::Detail;
                    model.select_deal(Some(0));
                    UpdateResult::with_navigation()
                }
                None => UpdateResult::none(),
            }
        }
        Message::Back => {
            if model.ui.screen == Screen::Detail {
                model.ui.screen = Screen::List;
                return UpdateResult::with_navigation();
            }
            UpdateResult::none()
        }

        // ── Search ──────────────────────────────────────────────────────
        Message::StartSearch => {
            if model.ui.screen == Screen::List {
                model.ui.search_active = true;
            }
            UpdateResult::none()
        }
        Message::SearchPush(c) => {
            let mut query = view_model.list_state().search_query;
            query.push(c);
            view_model.on_search_query_changed(&query);
            model.select(Some(0));
            UpdateResult::none()
        }
        Message::SearchPop => {
            let mut query = view_model.list_state().search_query;
            if query.pop().is_some() {
                view_model.on_search_query_changed(&query);
                model.select(Some(0));
            }
            UpdateResult::none()
        }
        Message::ConfirmSearch => {
            model.ui.search_active = false;
            UpdateResult::none()
        }
        Message::CancelSearch => {
            model.ui.search_active = false;
            UpdateResult::with_msg(Message::ClearSearch)
        }
        Message::ClearSearch => {
            if !view_model.list_state().search_query.is_empty() {
                view_model.on_search_query_changed("");
                model.select(Some(0));
            }
            UpdateResult::none()
        }

        // ── Settings sheet ──────────────────────────────────────────────
        Message::OpenSettings => {
            let current = view_model.list_state().sort_option;
            model.ui.settings_index = SortOption::ALL
                .iter()
                .position(|&option| option == current)
                .unwrap_or(0);
            view_model.on_settings_clicked(true);
            UpdateResult::none()
        }
        Message::CloseSettings => {
            view_model.on_settings_clicked(false);
            UpdateResult::none()
        }
        Message::SettingsNext => {
            model.ui.settings_index = (model.ui.settings_index + 1) % SortOption::ALL.len();
            UpdateResult::none()
        }
        Message::SettingsPrevious => {
            if model.ui.settings_index == 0 {
                model.ui.settings_index = SortOption::ALL.len() - 1;
            } else {
                model.ui.settings_index -= 1;
            }
            UpdateResult::none()
        }
        Message::SettingsSelect => {
            if let Some(option) = SortOption::ALL.get(model.ui.settings_index) {
                match option {
                    SortOption::Name => view_model.sort_by_name(),
                    SortOption::BestDeals => view_model.sort_by_best_deals(),
                }
            }
            view_model.on_settings_clicked(false);
            model.select(Some(0));
            UpdateResult::none()
        }

        // ── Popups ──────────────────────────────────────────────────────
        Message::OpenKeybinds => {
            model.ui.popup = Popup::Keybinds;
            UpdateResult::none()
        }
        Message::ClosePopup => {
            model.ui.popup = Popup::None;
            UpdateResult::none()
        }

        // ── Detail ──────────────────────────────────────────────────────
        Message::OpenImage => {
            let detail = view_model.detail_state();
            if let Some(restaurant) = detail.restaurant.filter(|r| !r.image_link.is_empty()) {
                if let Err(e) = webbrowser::open(&restaurant.image_link) {
                    tracing::warn!(error = %e, url = %restaurant.image_link, "failed to open image");
                    view_model
                        .actions()
                        .emit(Action::ShowSnackbar("Could not open the image".to_string()));
                }
            }
            UpdateResult::none()
        }

        // ── Data loading results ────────────────────────────────────────
        Message::RequestRefresh => {
            if view_model.refresh() {
                model.ui.spinner_frame = 0;
            }
            UpdateResult::none()
        }
        Message::LoadFinished => {
            let count = view_model.list_state().filtered_restaurants.len();
            model.clamp_selection(count);
            UpdateResult::with_list_refreshed()
        }
        Message::ShowSnackbar(text) => {
            model.show_snackbar(text, Instant::now());
            UpdateResult::none()
        }

        // ── System ──────────────────────────────────────────────────────
        Message::Tick => {
            if view_model.list_state().is_loading {
                model.ui.spinner_frame = (model.ui.spinner_frame + 1) % 10;
            }
            model.expire_snackbar(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            model.should_quit = true;
            UpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_utils::{loaded, names, restaurant, StaticFetcher};

    fn restaurants() -> Vec<eatclub_core::models::Restaurant> {
        vec![
            restaurant("1", "Restaurant A", &["Italian"], &[10, 35]),
            restaurant("2", "Restaurant B", &["Mexican"], &[20]),
            restaurant("3", "Cafe C", &["Coffee"], &[]),
        ]
    }

    fn model() -> Model {
        Model::new(Duration::from_secs(4))
    }

    /// Feed a message and any follow-ups it produces
    fn dispatch(model: &mut Model, view_model: &RestaurantListViewModel, msg: Message) -> UpdateResult {
        let mut result = update(model, view_model, msg);
        while let Some(next) = result.msg.take() {
            result = update(model, view_model, next);
        }
        result
    }

    #[tokio::test]
    async fn typing_forwards_every_keystroke_to_the_view_model() {
        let view_model = loaded(StaticFetcher(restaurants())).await;
        let mut model = model();

        dispatch(&mut model, &view_model, Message::StartSearch);
        assert!(model.ui.search_active);
        for c in "mex".chars() {
            dispatch(&mut model, &view_model, Message::SearchPush(c));
        }

        let state = view_model.list_state();
        assert_eq!(state.search_query, "mex");
        assert_eq!(names(&state.filtered_restaurants), vec!["Restaurant B"]);

        dispatch(&mut model, &view_model, Message::SearchPop);
        assert_eq!(view_model.list_state().search_query, "me");

        dispatch(&mut model, &view_model, Message::CancelSearch);
        assert!(!model.ui.search_active);
        assert_eq!(view_model.list_state().search_query, "");
        assert_eq!(view_model.list_state().filtered_restaurants.len(), 3);
    }

    #[tokio::test]
    async fn opening_a_row_selects_it_and_navigates() {
        let view_model = loaded(StaticFetcher(restaurants())).await;
        let mut model = model();

        dispatch(&mut model, &view_model, Message::SelectNext);
        let result = dispatch(&mut model, &view_model, Message::OpenSelected);

        assert!(result.navigated);
        assert_eq!(model.ui.screen, Screen::Detail);
        let detail = view_model.detail_state();
        // Best-deal order is A (35), B (20), C (0); the cursor was on B.
        assert_eq!(detail.restaurant.map(|r| r.name), Some("Restaurant B".to_string()));

        let result = dispatch(&mut model, &view_model, Message::Back);
        assert!(result.navigated);
        assert_eq!(model.ui.screen, Screen::List);
    }

    #[tokio::test]
    async fn opening_with_no_rows_stays_on_the_list() {
        let view_model = loaded(StaticFetcher(vec![])).await;
        let mut model = model();
        let result = dispatch(&mut model, &view_model, Message::OpenSelected);
        assert!(!result.navigated);
        assert_eq!(model.ui.screen, Screen::List);
        assert!(view_model.detail_state().restaurant.is_none());
    }

    #[tokio::test]
    async fn cursor_wraps_in_both_directions() {
        let view_model = loaded(StaticFetcher(restaurants())).await;
        let mut model = model();

        dispatch(&mut model, &view_model, Message::SelectPrevious);
        assert_eq!(model.selected_index(), 2);
        dispatch(&mut model, &view_model, Message::SelectNext);
        assert_eq!(model.selected_index(), 0);
    }

    #[tokio::test]
    async fn detail_cursor_moves_over_sorted_deals() {
        let view_model = loaded(StaticFetcher(restaurants())).await;
        let mut model = model();
        dispatch(&mut model, &view_model, Message::OpenSelected);

        assert_eq!(view_model.detail_state().deals[0].discount, 35);
        dispatch(&mut model, &view_model, Message::SelectNext);
        assert_eq!(model.ui.deals_state.selected(), Some(1));
        dispatch(&mut model, &view_model, Message::SelectNext);
        assert_eq!(model.ui.deals_state.selected(), Some(0));
        dispatch(&mut model, &view_model, Message::SelectPrevious);
        assert_eq!(model.ui.deals_state.selected(), Some(1));
    }

    #[tokio::test]
    async fn choosing_a_sort_applies_it_and_closes_the_sheet() {
        let view_model = loaded(StaticFetcher(restaurants())).await;
        let mut model = model();

        dispatch(&mut model, &view_model, Message::OpenSettings);
        assert!(view_model.list_state().show_settings_panel);
        // Cursor starts on the active option.
        assert_eq!(SortOption::ALL[model.ui.settings_index], SortOption::BestDeals);

        dispatch(&mut model, &view_model, Message::SettingsPrevious);
        dispatch(&mut model, &view_model, Message::SettingsSelect);

        let state = view_model.list_state();
        assert!(!state.show_settings_panel);
        assert_eq!(state.sort_option, SortOption::Name);
        assert_eq!(
            names(&state.restaurants),
            vec!["Cafe C", "Restaurant A", "Restaurant B"]
        );
    }

    #[tokio::test]
    async fn dismissing_the_sheet_keeps_the_sort() {
        let view_model = loaded(StaticFetcher(restaurants())).await;
        let mut model = model();

        dispatch(&mut model, &view_model, Message::OpenSettings);
        dispatch(&mut model, &view_model, Message::SettingsNext);
        dispatch(&mut model, &view_model, Message::CloseSettings);

        let state = view_model.list_state();
        assert!(!state.show_settings_panel);
        assert_eq!(state.sort_option, SortOption::BestDeals);
    }

    #[tokio::test]
    async fn snackbar_message_is_shown_and_expires() {
        let view_model = loaded(StaticFetcher(vec![])).await;
        let mut model = Model::new(Duration::ZERO);

        dispatch(
            &mut model,
            &view_model,
            Message::ShowSnackbar("Something went wrong".to_string()),
        );
        assert_eq!(
            model.snackbar.as_ref().map(|s| s.message.as_str()),
            Some("Something went wrong")
        );

        dispatch(&mut model, &view_model, Message::Tick);
        assert!(model.snackbar.is_none());
    }

    #[tokio::test]
    async fn load_finished_clamps_the_cursor() {
        let view_model = loaded(StaticFetcher(restaurants())).await;
        let mut model = model();
        model.select(Some(10));

        let result = dispatch(&mut model, &view_model, Message::LoadFinished);
        assert!(result.list_refreshed);
        assert_eq!(model.selected_index(), 2);
    }

    #[tokio::test]
    async fn quit_sets_flag() {
        let view_model = loaded(StaticFetcher(vec![])).await;
        let mut model = model();
        dispatch(&mut model, &view_model, Message::Quit);
        assert!(model.should_quit);
    }
}
