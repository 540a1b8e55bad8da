pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{EatClubClient, DEFAULT_BASE_URL};
