//! Snapshot types published by the view model, plus the pure derivations
//! (search filter, sort orders, detail ordering) that produce them.

use std::cmp::Reverse;

use eatclub_core::models::{Deal, Restaurant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    Name,
    #[default]
    BestDeals,
}

impl SortOption {
    pub const ALL: &'static [SortOption] = &[SortOption::Name, SortOption::BestDeals];

    pub fn name(&self) -> &str {
        match self {
            SortOption::Name => "Sort by Name",
            SortOption::BestDeals => "Sort by Best Deals",
        }
    }

    /// Stable in-place sort.
    ///
    /// `Name` compares names ordinally (case-sensitive, so "Zest" sorts
    /// before "apple"). `BestDeals` orders by descending best-deal discount,
    /// keeping the previous relative order on ties.
    pub fn sort(&self, restaurants: &mut [Restaurant]) {
        match self {
            SortOption::Name => restaurants.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOption::BestDeals => {
                restaurants.sort_by_key(|restaurant| Reverse(restaurant.best_deal_discount()))
            }
        }
    }
}

/// Restaurants matching `query`, in the order of `restaurants`
pub fn filter_restaurants(restaurants: &[Restaurant], query: &str) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| restaurant.matches_query(query))
        .cloned()
        .collect()
}

/// Deals by descending discount, ties in payload order
pub fn deals_by_discount(deals: &[Deal]) -> Vec<Deal> {
    let mut sorted = deals.to_vec();
    sorted.sort_by_key(|deal| Reverse(deal.discount));
    sorted
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListViewState {
    /// Full collection, reordered by the active sort.
    pub restaurants: Vec<Restaurant>,
    /// `restaurants` narrowed by `search_query`, same relative order.
    pub filtered_restaurants: Vec<Restaurant>,
    pub is_loading: bool,
    pub search_query: String,
    pub show_settings_panel: bool,
    pub sort_option: SortOption,
    /// Bumped each time a fetch settles, successfully or not.
    pub loads_completed: u64,
}

impl ListViewState {
    pub(crate) fn refilter(&mut self) {
        self.filtered_restaurants = filter_restaurants(&self.restaurants, &self.search_query);
    }

    pub(crate) fn apply_sort(&mut self, option: SortOption) {
        option.sort(&mut self.restaurants);
        self.sort_option = option;
        self.refilter();
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailViewState {
    pub restaurant: Option<Restaurant>,
    pub deals: Vec<Deal>,
}

impl DetailViewState {
    pub fn for_restaurant(restaurant: &Restaurant) -> Self {
        Self {
            restaurant: Some(restaurant.clone()),
            deals: deals_by_discount(&restaurant.deals),
        }
    }
}
