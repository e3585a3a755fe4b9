use log::info;
use serde::Serialize;

use crate::cart::ShoppingCart;
use crate::filter::RecipeFilter;
use crate::missing::missing_ingredients;
use crate::model::RecipeDetail;
use crate::normalize::normalize_pantry;
use crate::pantry::PantrySnapshot;
use crate::providers::RecipeProvider;

/// A found recipe together with the lines the pantry does not cover
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSuggestion {
    pub recipe: RecipeDetail,
    pub missing: Vec<String>,
}

impl RecipeSuggestion {
    pub fn new(recipe: RecipeDetail, pantry: &PantrySnapshot) -> Self {
        let missing = missing_ingredients(recipe.ingredient_lines(), pantry);
        Self { recipe, missing }
    }

    /// Put the missing lines on the shopping list. Returns how many were added.
    pub fn add_missing_to(&self, cart: &mut dyn ShoppingCart) -> usize {
        if self.missing.is_empty() {
            return 0;
        }
        cart.add_missing_ingredients(&self.missing)
    }
}

/// Finds recipes for one pantry snapshot
pub struct RecipeGenerator<'a> {
    provider: &'a dyn RecipeProvider,
    pantry: PantrySnapshot,
    search_terms: Vec<String>,
}

impl<'a> RecipeGenerator<'a> {
    pub fn new(provider: &'a dyn RecipeProvider, pantry: PantrySnapshot) -> Self {
        let search_terms = normalize_pantry(&pantry);
        info!("Pantry items used for search: {:?}", search_terms);
        Self {
            provider,
            pantry,
            search_terms,
        }
    }

    /// Cleaned, deduplicated pantry terms in first-seen order
    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    pub fn pantry(&self) -> &PantrySnapshot {
        &self.pantry
    }

    /// Find recipes matching the filter, each paired with its missing lines
    pub async fn generate(&self, filter: &RecipeFilter) -> Vec<RecipeSuggestion> {
        self.provider
            .find_recipes(&self.search_terms, filter)
            .await
            .into_iter()
            .map(|recipe| RecipeSuggestion::new(recipe, &self.pantry))
            .collect()
    }
}
