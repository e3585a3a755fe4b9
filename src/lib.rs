//! Pantry-aware recipe suggestions.
//!
//! Clean a pantry into search terms, find matching recipes through the
//! Spoonacular API, work out which ingredients are missing, and keep a
//! session-scoped collection of saved recipes.
//!
//! ```no_run
//! use pantry_chef::{PantrySnapshot, RecipeFilter, RecipeGenerator, SpoonacularClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SpoonacularClient::builder().api_key("your-api-key").build()?;
//! let pantry = PantrySnapshot::from_items(["Chicken", "Rice"]);
//! let generator = RecipeGenerator::new(&client, pantry);
//!
//! for suggestion in generator.generate(&RecipeFilter::new().count(3)).await {
//!     println!("{} (missing {})", suggestion.recipe.title, suggestion.missing.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod cart;
pub mod collection;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod missing;
pub mod model;
pub mod normalize;
pub mod pantry;
pub mod providers;
pub mod render;

pub use crate::builder::SpoonacularClientBuilder;
pub use crate::cart::{InMemoryCart, ShoppingCart};
pub use crate::collection::RecipeCollection;
pub use crate::config::ChefConfig;
pub use crate::error::RecipeError;
pub use crate::filter::{Diet, Intolerance, MealType, RecipeFilter};
pub use crate::generator::{RecipeGenerator, RecipeSuggestion};
pub use crate::missing::missing_ingredients;
pub use crate::model::{
    IngredientLine, RecipeDetail, RecipeId, RecipeSource, RecipeStub, SavedRecipe,
};
pub use crate::normalize::normalize_pantry;
pub use crate::pantry::{InMemoryPantry, PantryManager, PantryRow, PantrySnapshot};
pub use crate::providers::{RecipeProvider, SpoonacularClient};

/// Find recipe suggestions for a pantry using configuration from
/// `config.toml` and the environment
///
/// # Errors
/// Fails only when configuration cannot be loaded or no API key is set.
/// Request failures leave fewer or no suggestions.
pub async fn suggest_recipes(
    pantry: PantrySnapshot,
    filter: &RecipeFilter,
) -> Result<Vec<RecipeSuggestion>, RecipeError> {
    let config = ChefConfig::load()?;
    let client = SpoonacularClient::new(&config.spoonacular)?;
    let generator = RecipeGenerator::new(&client, pantry);
    Ok(generator.generate(filter).await)
}
