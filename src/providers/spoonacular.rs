use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::Client;
use serde_json::Value;

use crate::builder::SpoonacularClientBuilder;
use crate::config::SpoonacularConfig;
use crate::error::RecipeError;
use crate::filter::RecipeFilter;
use crate::model::{RecipeDetail, RecipeInformation, RecipeStub};
use crate::providers::RecipeProvider;

pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
    search_timeout: Duration,
    detail_timeout: Duration,
    max_search_terms: usize,
    max_search_results: usize,
}

impl SpoonacularClient {
    /// Create a client from configuration, falling back to the
    /// SPOONACULAR_API_KEY environment variable for the key
    pub fn new(config: &SpoonacularConfig) -> Result<Self, RecipeError> {
        SpoonacularClientBuilder::default()
            .config(config.clone())
            .build()
    }

    pub fn builder() -> SpoonacularClientBuilder {
        SpoonacularClientBuilder::default()
    }

    pub(crate) fn from_parts(
        client: Client,
        api_key: String,
        base_url: String,
        search_timeout: Duration,
        detail_timeout: Duration,
        max_search_terms: usize,
        max_search_results: usize,
    ) -> Self {
        SpoonacularClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            search_timeout,
            detail_timeout,
            max_search_terms,
            max_search_results,
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let defaults = SpoonacularConfig::default();
        Self::from_parts(
            Client::new(),
            api_key,
            base_url,
            Duration::from_secs(defaults.search_timeout_secs),
            Duration::from_secs(defaults.detail_timeout_secs),
            defaults.max_search_terms,
            defaults.max_search_results,
        )
    }

    /// Query `findByIngredients` and return the abbreviated hits.
    ///
    /// At most `max_search_terms` terms are sent. The result has one stub
    /// per hit, in ranking order; hits without an id have `id: None`.
    pub async fn search(
        &self,
        search_terms: &[String],
        filter: &RecipeFilter,
    ) -> Result<Vec<RecipeStub>, RecipeError> {
        let terms = &search_terms[..search_terms.len().min(self.max_search_terms)];

        let mut params: Vec<(&str, String)> = vec![
            ("ingredients", terms.join(",")),
            (
                "number",
                filter
                    .search_result_count(self.max_search_results)
                    .to_string(),
            ),
            // Leave out staples like water, salt and flour
            ("ignorePantry", "true".to_string()),
            // Maximize used ingredients
            ("ranking", "2".to_string()),
            ("limitLicense", "false".to_string()),
        ];
        if let Some(diet) = filter.diet {
            params.push(("diet", diet.as_str().to_string()));
        }
        if let Some(intolerances) = filter.intolerances_param() {
            params.push(("intolerances", intolerances));
        }
        if let Some(meal_type) = filter.meal_type {
            params.push(("type", meal_type.as_str().to_string()));
        }

        debug!("Querying Spoonacular with parameters:");
        for (key, value) in &params {
            debug!("  {}: {}", key, value);
        }

        let response = self
            .client
            .get(format!("{}/recipes/findByIngredients", self.base_url))
            .query(&[("apiKey", self.api_key.as_str())])
            .query(&params)
            .timeout(self.search_timeout)
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        let hits = match body {
            Value::Array(hits) => hits,
            other => {
                return Err(RecipeError::InvalidResponse(format!(
                    "expected a list of recipes, got {}",
                    json_kind(&other)
                )))
            }
        };

        // Every hit keeps its place, so a bad one still uses up a slot
        // of the `count` window when details are resolved.
        Ok(hits.into_iter().map(RecipeStub::from_hit).collect())
    }

    /// Fetch and validate the full information for one recipe
    pub async fn recipe_information(&self, id: i64) -> Result<RecipeDetail, RecipeError> {
        let response = self
            .client
            .get(format!("{}/recipes/{}/information", self.base_url, id))
            .query(&[("apiKey", self.api_key.as_str()), ("includeNutrition", "false")])
            .timeout(self.detail_timeout)
            .send()
            .await?
            .error_for_status()?;

        let information: RecipeInformation = response.json().await?;
        information.into_detail(id)
    }

    async fn resolve(
        &self,
        stub: &RecipeStub,
        filter: &RecipeFilter,
    ) -> Result<RecipeDetail, RecipeError> {
        let id = stub
            .id
            .ok_or_else(|| RecipeError::InvalidResponse("search hit without an id".to_string()))?;

        let mut detail = self.recipe_information(id).await?;
        detail.meal_type = filter.meal_type.map(|m| m.as_str().to_string());
        Ok(detail)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    fn provider_name(&self) -> &str {
        "spoonacular"
    }

    async fn find_recipes(
        &self,
        search_terms: &[String],
        filter: &RecipeFilter,
    ) -> Vec<RecipeDetail> {
        if search_terms.is_empty() {
            warn!("No pantry items to search with");
            return Vec::new();
        }

        let stubs = match self.search(search_terms, filter).await {
            Ok(stubs) => stubs,
            Err(e) => {
                error!("Recipe search failed: {}", e);
                return Vec::new();
            }
        };
        info!("Received {} raw recipes", stubs.len());

        // Detail lookups are the expensive part, so only resolve as many
        // hits as recipes were asked for.
        let mut resolved = Vec::new();
        for stub in stubs.iter().take(filter.recipe_count()) {
            resolved.push((stub.id, self.resolve(stub, filter).await));
        }

        let recipes: Vec<RecipeDetail> = resolved
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(detail) => Some(detail),
                Err(e) => {
                    match id {
                        Some(id) => warn!("Couldn't get details for recipe {}: {}", id, e),
                        None => warn!("Couldn't get details for recipe: {}", e),
                    }
                    None
                }
            })
            .collect();

        info!("Found {} complete recipes", recipes.len());
        recipes
    }
}
