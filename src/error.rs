use thiserror::Error;

/// Errors that can occur while finding, validating or storing recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// No Spoonacular API key in config or environment
    #[error("Spoonacular API key not found in config or environment")]
    MissingApiKey,

    /// Transport failure, timeout or non-success status
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// Recipe information response lacks a required field
    #[error("Recipe {id} is missing required field '{field}'")]
    MissingField { id: String, field: &'static str },

    /// Response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    /// Failed to read a pantry file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl From<reqwest::Error> for RecipeError {
    // Request URLs carry the apiKey query parameter.
    fn from(err: reqwest::Error) -> Self {
        RecipeError::Http(err.without_url())
    }
}
