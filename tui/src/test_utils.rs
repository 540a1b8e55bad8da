//! Fixtures shared by the unit tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use eatclub_core::models::{Deal, Restaurant};
use eatclub_core::{EatClubError, RestaurantFetcher, Result};

use crate::viewmodel::RestaurantListViewModel;

pub fn deal(id: &str, discount: i32) -> Deal {
    Deal {
        id: id.to_string(),
        discount,
        qty_left: 0,
        dine_in: false,
        lightning: None,
        open: None,
        close: None,
        start: None,
        end: None,
    }
}

pub fn restaurant(id: &str, name: &str, cuisines: &[&str], discounts: &[i32]) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        address1: String::new(),
        suburb: String::new(),
        cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
        image_link: String::new(),
        open: String::new(),
        close: String::new(),
        deals: discounts
            .iter()
            .enumerate()
            .map(|(i, d)| deal(&format!("{}-d{}", id, i), *d))
            .collect(),
    }
}

pub fn names(restaurants: &[Restaurant]) -> Vec<&str> {
    restaurants.iter().map(|r| r.name.as_str()).collect()
}

pub struct StaticFetcher(pub Vec<Restaurant>);

#[async_trait]
impl RestaurantFetcher for StaticFetcher {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>> {
        Ok(self.0.clone())
    }
}

pub struct FailingFetcher;

#[async_trait]
impl RestaurantFetcher for FailingFetcher {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>> {
        Err(EatClubError::Network("connection refused".to_string()))
    }
}

pub async fn loaded(fetcher: impl RestaurantFetcher + 'static) -> RestaurantListViewModel {
    let view_model = RestaurantListViewModel::new(Arc::new(fetcher));
    wait_until_idle(&view_model).await;
    view_model
}

pub async fn wait_until_idle(view_model: &RestaurantListViewModel) {
    let mut rx = view_model.subscribe_list();
    tokio::time::timeout(Duration::from_secs(1), rx.wait_for(|state| !state.is_loading))
        .await
        .expect("fetch did not finish")
        .expect("view model dropped");
}
