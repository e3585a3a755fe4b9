//! Usage:
//! ```bash
//! # Five recipes for whatever is in the pantry
//! pantry-chef --pantry pantry.json
//!
//! # Three gluten free dinners without dairy, saved and planned
//! pantry-chef --pantry pantry.json --diet "gluten free" --intolerance dairy \
//!     --meal-type "main course" --count 3 --save
//!
//! # Put missing ingredients on the shopping list
//! pantry-chef --pantry pantry.json --add-missing
//! ```

use std::error::Error;

use clap::Parser;
use log::{error, info};

use pantry_chef::render::instructions_to_text;
use pantry_chef::{
    ChefConfig, Diet, InMemoryCart, InMemoryPantry, Intolerance, MealType, PantryManager,
    PantrySnapshot, RecipeCollection, RecipeFilter, RecipeGenerator, RecipeSuggestion,
    SpoonacularClient,
};

#[derive(Parser)]
#[command(
    name = "pantry-chef",
    about = "Recipe suggestions based on your pantry, diet and allergies",
    long_about = "Finds recipes that use what is in your pantry, shows what is missing, \
                  and can save recipes or build a shopping list."
)]
struct Cli {
    /// Pantry JSON file: a list of objects with an "Item Name" key
    #[arg(long, short = 'p')]
    pantry: Option<String>,

    /// Dietary preference (vegetarian, vegan, pescetarian, ketogenic, gluten free)
    #[arg(long)]
    diet: Option<Diet>,

    /// Allergy or intolerance to avoid; repeat for several
    #[arg(long = "intolerance", short = 'i')]
    intolerances: Vec<Intolerance>,

    /// Meal type (main course, side dish, dessert, breakfast, soup, ...)
    #[arg(long)]
    meal_type: Option<MealType>,

    /// Number of recipes to suggest
    #[arg(long, short = 'n')]
    count: Option<usize>,

    /// Save every suggestion and print what each one still needs
    #[arg(long)]
    save: bool,

    /// Add missing ingredients of every suggestion to the shopping list
    #[arg(long)]
    add_missing: bool,

    /// Print suggestions as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ChefConfig::load()?;

    let pantry_path = cli
        .pantry
        .clone()
        .or_else(|| config.pantry_file.clone())
        .ok_or("Please provide a pantry file with --pantry or pantry_file in config.toml")?;
    let pantry = InMemoryPantry::new(PantrySnapshot::load(&pantry_path)?);

    let snapshot = pantry.pantry();
    if snapshot.is_empty() {
        error!("Your pantry is empty. Add ingredients to {} first.", pantry_path);
        return Ok(());
    }

    let filter = build_filter(&cli, &config);
    let client = SpoonacularClient::new(&config.spoonacular)?;
    let generator = RecipeGenerator::new(&client, snapshot);

    let suggestions = generator.generate(&filter).await;
    if suggestions.is_empty() {
        println!("No recipes found. Try fewer restrictions or different pantry items.");
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        println!("Found {} recipes.\n", suggestions.len());
        for suggestion in &suggestions {
            print_suggestion(suggestion);
        }
    }

    if cli.add_missing {
        let mut cart = InMemoryCart::new();
        for suggestion in &suggestions {
            let added = suggestion.add_missing_to(&mut cart);
            info!("Added {} ingredients from {}", added, suggestion.recipe.title);
        }
        println!("Shopping list:");
        for item in cart.items() {
            println!("  - {}", item);
        }
    }

    if cli.save {
        let mut collection = RecipeCollection::new();
        for suggestion in &suggestions {
            if !collection.save(&suggestion.recipe) {
                info!("{} is already saved", suggestion.recipe.title);
            }
        }

        println!("\nMeal plan:");
        for saved in collection.list() {
            let missing = collection
                .plan_meal(&saved.id, generator.pantry())
                .unwrap_or_default();
            if missing.is_empty() {
                println!("  {} [{}]: ready to cook", saved.title, saved.id);
            } else {
                println!(
                    "  {} [{}]: needs {}",
                    saved.title,
                    saved.id,
                    missing.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn build_filter(cli: &Cli, config: &ChefConfig) -> RecipeFilter {
    let mut filter = RecipeFilter::new()
        .count(cli.count.unwrap_or(config.default_count))
        .intolerances(cli.intolerances.iter().copied());
    if let Some(diet) = cli.diet {
        filter = filter.diet(diet);
    }
    if let Some(meal_type) = cli.meal_type {
        filter = filter.meal_type(meal_type);
    }
    filter
}

fn print_suggestion(suggestion: &RecipeSuggestion) {
    let recipe = &suggestion.recipe;
    println!("== {}", recipe.title);
    if let Some(url) = &recipe.source_url {
        println!("{}", url);
    }

    println!("\nIngredients:");
    for line in recipe.ingredient_lines() {
        println!("  - {}", line);
    }

    if !suggestion.missing.is_empty() {
        println!("\nMissing:");
        for line in &suggestion.missing {
            println!("  - {}", line);
        }
    }

    println!("\nInstructions:");
    println!("{}\n", instructions_to_text(&recipe.instructions));
}
