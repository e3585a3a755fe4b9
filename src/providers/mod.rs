mod spoonacular;

pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;

use crate::filter::RecipeFilter;
use crate::model::RecipeDetail;

/// Source of fully resolved recipes for a set of pantry search terms
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "spoonacular")
    fn provider_name(&self) -> &str;

    /// Find at most `filter.recipe_count()` recipes using these terms.
    ///
    /// Never fails: request errors are logged and leave fewer (or no)
    /// recipes in the result.
    async fn find_recipes(
        &self,
        search_terms: &[String],
        filter: &RecipeFilter,
    ) -> Vec<RecipeDetail>;
}
