use async_trait::async_trait;

use crate::{models::Restaurant, Result};

/// Source of the full restaurant collection.
///
/// The state manager only ever sees this trait, so tests can swap the HTTP
/// client for an in-memory fake.
#[async_trait]
pub trait RestaurantFetcher: Send + Sync {
    /// Fetch every restaurant, in payload order.
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>>;
}
