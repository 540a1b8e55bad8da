//! The restaurant list view model: single owner of list and detail state.
//!
//! Every intent is one read-modify-write on a `watch` channel, so concurrent
//! callers serialize on the channel's lock and no update is lost. The only
//! asynchronous work is the restaurant fetch, which runs on a spawned task
//! holding a weak reference back to the state; a view model dropped before
//! the fetch resolves is left untouched.

use std::sync::{Arc, Weak};

use eatclub_core::{models::Restaurant, EatClubError, RestaurantFetcher, Result};
use tokio::sync::watch;

use crate::actions::{Action, ActionMailbox};
use crate::state::{DetailViewState, ListViewState, SortOption};

pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong";

struct Shared {
    list: watch::Sender<ListViewState>,
    detail: watch::Sender<DetailViewState>,
    actions: ActionMailbox,
}

impl Shared {
    fn finish_fetch(&self, result: Result<Vec<Restaurant>>) {
        match result {
            Ok(mut restaurants) => {
                SortOption::BestDeals.sort(&mut restaurants);
                let count = restaurants.len();
                self.list.send_modify(|state| {
                    state.restaurants = restaurants;
                    state.sort_option = SortOption::BestDeals;
                    state.is_loading = false;
                    state.loads_completed += 1;
                    state.refilter();
                });
                tracing::info!(count, "restaurants loaded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch restaurants");
                self.actions
                    .emit(Action::ShowSnackbar(FETCH_FAILED_MESSAGE.to_string()));
                self.list.send_modify(|state| {
                    state.is_loading = false;
                    state.loads_completed += 1;
                });
            }
        }
    }
}

pub struct RestaurantListViewModel {
    shared: Arc<Shared>,
    fetcher: Arc<dyn RestaurantFetcher>,
}

impl RestaurantListViewModel {
    /// Creates the view model and starts the initial fetch.
    ///
    /// Must be called from within a Tokio runtime. `is_loading` is already
    /// `true` when this returns.
    pub fn new(fetcher: Arc<dyn RestaurantFetcher>) -> Self {
        let (list, _) = watch::channel(ListViewState::default());
        let (detail, _) = watch::channel(DetailViewState::default());
        let view_model = Self {
            shared: Arc::new(Shared {
                list,
                detail,
                actions: ActionMailbox::new(),
            }),
            fetcher,
        };
        view_model.start_fetch();
        view_model
    }

    // ── Observation ─────────────────────────────────────────────────────

    pub fn list_state(&self) -> ListViewState {
        self.shared.list.borrow().clone()
    }

    pub fn detail_state(&self) -> DetailViewState {
        self.shared.detail.borrow().clone()
    }

    pub fn subscribe_list(&self) -> watch::Receiver<ListViewState> {
        self.shared.list.subscribe()
    }

    pub fn subscribe_detail(&self) -> watch::Receiver<DetailViewState> {
        self.shared.detail.subscribe()
    }

    pub fn actions(&self) -> &ActionMailbox {
        &self.shared.actions
    }

    // ── Intents ─────────────────────────────────────────────────────────

    pub fn on_search_query_changed(&self, query: &str) {
        tracing::debug!(query, "search query changed");
        self.shared.list.send_modify(|state| {
            state.search_query = query.to_string();
            state.refilter();
        });
    }

    pub fn sort_by_name(&self) {
        self.apply_sort(SortOption::Name);
    }

    pub fn sort_by_best_deals(&self) {
        self.apply_sort(SortOption::BestDeals);
    }

    /// Replaces the detail state. `restaurant` is not checked against the
    /// current collection.
    pub fn on_restaurant_selected(&self, restaurant: &Restaurant) {
        tracing::debug!(id = %restaurant.id, name = %restaurant.name, "restaurant selected");
        self.shared
            .detail
            .send_replace(DetailViewState::for_restaurant(restaurant));
    }

    pub fn on_settings_clicked(&self, show: bool) {
        self.shared
            .list
            .send_modify(|state| state.show_settings_panel = show);
    }

    /// Re-fetches the collection unless a fetch is already in flight.
    /// Returns whether a fetch was started.
    pub fn refresh(&self) -> bool {
        self.start_fetch()
    }

    fn apply_sort(&self, option: SortOption) {
        tracing::debug!(?option, "sorting restaurants");
        self.shared.list.send_modify(|state| state.apply_sort(option));
    }

    fn start_fetch(&self) -> bool {
        let started = self.shared.list.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            state.is_loading = true;
            true
        });
        if !started {
            tracing::debug!("fetch already in flight");
            return false;
        }

        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let fetcher = Arc::clone(&self.fetcher);
        tokio::spawn(async move {
            // A panicking fetcher counts as a failed fetch.
            let result = match tokio::spawn(async move { fetcher.fetch_restaurants().await }).await {
                Ok(result) => result,
                Err(e) => Err(EatClubError::Task(e.to_string())),
            };
            match shared.upgrade() {
                Some(shared) => shared.finish_fetch(result),
                None => tracing::debug!("view model dropped before fetch completed"),
            }
        });
        true
    }
}
