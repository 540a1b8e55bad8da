use std::time::Duration;

use eatclub_core::{EatClubError, Result};
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://eccdn.com.au";

pub struct EatClubClient {
    client: Client,
    base_url: String,
}

impl EatClubClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EatClubError::Config(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
