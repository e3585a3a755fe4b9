use log::debug;

use crate::missing::missing_ingredients;
use crate::model::{IngredientLine, RecipeDetail, RecipeId, RecipeSource, SavedRecipe};
use crate::pantry::PantrySnapshot;

const UNSPECIFIED_MEAL_TYPE: &str = "unspecified";
const NO_INSTRUCTIONS: &str = "No instructions provided.";

/// Recipes saved during a session, in the order they were saved.
/// Ids are unique.
#[derive(Debug, Default)]
pub struct RecipeCollection {
    recipes: Vec<SavedRecipe>,
    // Never reused, so a removed synthetic id cannot come back
    next_custom_id: u64,
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a recipe. Returns `false` without changing anything when a
    /// recipe with the same id is already saved.
    pub fn save(&mut self, recipe: &RecipeDetail) -> bool {
        let id = match recipe.id {
            Some(id) if self.contains(&id) => {
                debug!("Recipe {} already saved", id);
                return false;
            }
            Some(id) => id,
            None => self.next_synthetic_id(),
        };

        self.recipes.push(project(id, recipe));
        debug!("Saved recipe {} ({} total)", id, self.recipes.len());
        true
    }

    /// Saved recipes in insertion order
    pub fn list(&self) -> &[SavedRecipe] {
        &self.recipes
    }

    pub fn get(&self, id: &RecipeId) -> Option<&SavedRecipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RecipeId) -> bool {
        self.get(id).is_some()
    }

    /// Remove the recipe with this id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &RecipeId) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| &r.id != id);
        before != self.recipes.len()
    }

    /// Ingredient names of a saved recipe that the pantry does not cover.
    /// `None` when no recipe with this id is saved.
    pub fn plan_meal(&self, id: &RecipeId, pantry: &PantrySnapshot) -> Option<Vec<String>> {
        let recipe = self.get(id)?;
        Some(missing_ingredients(&recipe.ingredient_names, pantry))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn next_synthetic_id(&mut self) -> RecipeId {
        loop {
            let id = RecipeId::Custom(self.next_custom_id);
            self.next_custom_id += 1;
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

fn project(id: RecipeId, recipe: &RecipeDetail) -> SavedRecipe {
    let instructions = if recipe.instructions.trim().is_empty() {
        NO_INSTRUCTIONS.to_string()
    } else {
        recipe.instructions.clone()
    };

    SavedRecipe {
        id,
        title: recipe.title.clone(),
        image: recipe.image.clone().unwrap_or_default(),
        ingredients: recipe.ingredient_lines().map(str::to_string).collect(),
        ingredient_names: recipe
            .extended_ingredients
            .iter()
            .map(IngredientLine::lowercase_name)
            .collect(),
        instructions,
        meal_type: recipe
            .meal_type
            .clone()
            .unwrap_or_else(|| UNSPECIFIED_MEAL_TYPE.to_string()),
        source: RecipeSource::Api,
    }
}
