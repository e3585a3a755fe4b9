use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ChefConfig {
    /// Spoonacular API settings
    #[serde(default)]
    pub spoonacular: SpoonacularConfig,
    /// Number of recipes to suggest when not specified
    #[serde(default = "default_count")]
    pub default_count: usize,
    /// Pantry JSON file used when none is passed on the command line
    pub pantry_file: Option<String>,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            spoonacular: SpoonacularConfig::default(),
            default_count: default_count(),
            pantry_file: None,
        }
    }
}

/// Configuration for the Spoonacular recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct SpoonacularConfig {
    /// API key (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API host
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for the findByIngredients call, in seconds
    #[serde(default = "default_search_timeout")]
    pub search_timeout_secs: u64,
    /// Timeout for each recipe information call, in seconds
    #[serde(default = "default_detail_timeout")]
    pub detail_timeout_secs: u64,
    /// Maximum number of pantry terms sent in one search
    #[serde(default = "default_max_search_terms")]
    pub max_search_terms: usize,
    /// Upper bound on the number of search hits requested
    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            search_timeout_secs: default_search_timeout(),
            detail_timeout_secs: default_detail_timeout(),
            max_search_terms: default_max_search_terms(),
            max_search_results: default_max_search_results(),
        }
    }
}

// Default value functions
fn default_count() -> usize {
    5
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_search_timeout() -> u64 {
    10
}

fn default_detail_timeout() -> u64 {
    5
}

fn default_max_search_terms() -> usize {
    20
}

fn default_max_search_results() -> usize {
    10
}

impl ChefConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PANTRY_CHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PANTRY_CHEF__SPOONACULAR__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ChefConfig::load`] for the source priority.
pub fn load_config() -> Result<ChefConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: PANTRY_CHEF__SPOONACULAR__API_KEY
        .add_source(
            Environment::with_prefix("PANTRY_CHEF")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
