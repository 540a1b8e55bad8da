pub mod error;
pub mod fetcher;
pub mod models;

pub use error::{EatClubError, Result};
pub use fetcher::RestaurantFetcher;
