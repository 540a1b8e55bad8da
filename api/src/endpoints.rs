use async_trait::async_trait;
use eatclub_core::{models::Restaurant, EatClubError, RestaurantFetcher, Result};

use crate::{client::EatClubClient, types::RestaurantsResponse};

const RESTAURANTS_PATH: &str = "/misc/challengedata.json";

impl EatClubClient {
    pub fn restaurants_url(&self) -> String {
        format!("{}{}", self.base_url(), RESTAURANTS_PATH)
    }

    pub async fn get_restaurants(&self) -> Result<Vec<Restaurant>> {
        let url = self.restaurants_url();
        tracing::debug!(%url, "fetching restaurants");

        let response = self
            .client()
            .get(&url)
            .send()
            .await
            .map_err(|e| EatClubError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EatClubError::Api(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let restaurants_response: RestaurantsResponse = response
            .json()
            .await
            .map_err(|e| EatClubError::Parse(e.to_string()))?;

        let restaurants: Vec<Restaurant> = restaurants_response
            .restaurants
            .into_iter()
            .map(Restaurant::from)
            .collect();
        tracing::info!(count = restaurants.len(), "restaurants fetched");
        Ok(restaurants)
    }

    /// Looks a restaurant up by id. The endpoint has no per-item route, so this
    /// downloads the whole collection.
    pub async fn get_restaurant_by_id(&self, id: &str) -> Result<Option<Restaurant>> {
        let restaurants = self.get_restaurants().await?;
        Ok(find_restaurant(restaurants, id))
    }
}

/// First restaurant with the given id, in payload order
pub fn find_restaurant(restaurants: Vec<Restaurant>, id: &str) -> Option<Restaurant> {
    restaurants.into_iter().find(|r| r.id == id)
}

#[async_trait]
impl RestaurantFetcher for EatClubClient {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>> {
        self.get_restaurants().await
    }
}
