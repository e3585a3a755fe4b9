use std::time::Duration;

use reqwest::Client;

use crate::config::SpoonacularConfig;
use crate::error::RecipeError;
use crate::providers::SpoonacularClient;

/// Environment variable read when no API key is configured
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

/// Builder for configuring a [`SpoonacularClient`]
#[derive(Debug, Default)]
pub struct SpoonacularClientBuilder {
    config: Option<SpoonacularConfig>,
    api_key: Option<String>,
    base_url: Option<String>,
    search_timeout: Option<Duration>,
    detail_timeout: Option<Duration>,
    max_search_terms: Option<usize>,
}

impl SpoonacularClientBuilder {
    /// Start from a loaded configuration. Values set directly on the
    /// builder take precedence over it.
    ///
    /// # Example
    /// ```
    /// use pantry_chef::{config::SpoonacularConfig, SpoonacularClient};
    ///
    /// let builder = SpoonacularClient::builder()
    ///     .config(SpoonacularConfig::default());
    /// ```
    pub fn config(mut self, config: SpoonacularConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the API key directly instead of relying on config or environment
    ///
    /// # Example
    /// ```
    /// use pantry_chef::SpoonacularClient;
    ///
    /// let client = SpoonacularClient::builder()
    ///     .api_key("your-api-key")
    ///     .build();
    /// assert!(client.is_ok());
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point the client at another host (a proxy or a test server)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Timeout for the ingredient search request
    ///
    /// # Example
    /// ```
    /// use pantry_chef::SpoonacularClient;
    /// use std::time::Duration;
    ///
    /// let builder = SpoonacularClient::builder()
    ///     .search_timeout(Duration::from_secs(3));
    /// ```
    pub fn search_timeout(mut self, duration: Duration) -> Self {
        self.search_timeout = Some(duration);
        self
    }

    /// Timeout for each recipe information request
    pub fn detail_timeout(mut self, duration: Duration) -> Self {
        self.detail_timeout = Some(duration);
        self
    }

    /// Maximum number of pantry terms sent in one search
    pub fn max_search_terms(mut self, max: usize) -> Self {
        self.max_search_terms = Some(max);
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - No API key is set on the builder, in the config or in SPOONACULAR_API_KEY
    /// - A limit or timeout is zero
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<SpoonacularClient, RecipeError> {
        let config = self.config.unwrap_or_default();

        let api_key = self
            .api_key
            .or(config.api_key)
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or(RecipeError::MissingApiKey)?;

        let search_timeout = self
            .search_timeout
            .unwrap_or(Duration::from_secs(config.search_timeout_secs));
        let detail_timeout = self
            .detail_timeout
            .unwrap_or(Duration::from_secs(config.detail_timeout_secs));
        if search_timeout.is_zero() || detail_timeout.is_zero() {
            return Err(RecipeError::BuilderError(
                "Request timeouts must be greater than zero".to_string(),
            ));
        }

        let max_search_terms = self.max_search_terms.unwrap_or(config.max_search_terms);
        if max_search_terms == 0 || config.max_search_results == 0 {
            return Err(RecipeError::BuilderError(
                "Search limits must be greater than zero".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent(concat!("pantry-chef/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(SpoonacularClient::from_parts(
            client,
            api_key,
            self.base_url.unwrap_or(config.base_url),
            search_timeout,
            detail_timeout,
            max_search_terms,
            config.max_search_results,
        ))
    }
}
