use std::fmt;
use std::str::FromStr;

use html_escape::decode_html_entities;
use log::warn;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::RecipeError;

const CUSTOM_ID_PREFIX: &str = "custom_";

/// Identifier of a recipe, either assigned by the API or generated locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeId {
    /// Id assigned by the recipe API
    Api(i64),
    /// Synthetic id for a recipe that arrived without one
    Custom(u64),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Api(id) => write!(f, "{}", id),
            RecipeId::Custom(n) => write!(f, "{}{}", CUSTOM_ID_PREFIX, n),
        }
    }
}

impl FromStr for RecipeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(n) = s.strip_prefix(CUSTOM_ID_PREFIX) {
            return n
                .parse()
                .map(RecipeId::Custom)
                .map_err(|_| format!("Invalid custom recipe id: {}", s));
        }
        s.parse()
            .map(RecipeId::Api)
            .map_err(|_| format!("Invalid recipe id: {}", s))
    }
}

impl From<i64> for RecipeId {
    fn from(id: i64) -> Self {
        RecipeId::Api(id)
    }
}

impl Serialize for RecipeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecipeId::Api(id) => serializer.serialize_i64(*id),
            RecipeId::Custom(_) => serializer.collect_str(self),
        }
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Human-readable full line, e.g. "2 red onions, diced"
    #[serde(default)]
    pub original: Option<String>,
    /// Bare ingredient name, e.g. "red onion"
    #[serde(default)]
    pub name: Option<String>,
}

impl IngredientLine {
    pub fn new(original: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            original: Some(original.into()),
            name: Some(name.into()),
        }
    }

    /// Text to show for this line: `original`, then `name`, then "Unknown"
    pub fn display(&self) -> &str {
        self.original
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unknown")
    }

    /// Lowercased `name`, empty when the API gave none
    pub fn lowercase_name(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Abbreviated hit returned by the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStub {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub used_ingredient_count: Option<u32>,
    #[serde(default)]
    pub missed_ingredient_count: Option<u32>,
    #[serde(default)]
    pub likes: Option<u32>,
}

impl RecipeStub {
    /// Read one search hit. Ranking metadata that does not parse is
    /// dropped; the id is kept whenever the hit carries a numeric one.
    pub fn from_hit(hit: Value) -> Self {
        let id = hit.get("id").and_then(Value::as_i64);
        match serde_json::from_value::<RecipeStub>(hit) {
            Ok(stub) => stub,
            Err(e) => {
                warn!("Search hit {:?} has unreadable metadata: {}", id, e);
                RecipeStub {
                    id,
                    ..RecipeStub::default()
                }
            }
        }
    }
}

/// Fully resolved recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: Option<RecipeId>,
    pub title: String,
    pub image: Option<String>,
    pub extended_ingredients: Vec<IngredientLine>,
    /// May contain HTML markup
    pub instructions: String,
    pub source_url: Option<String>,
    /// Meal type the recipe was searched for, if any
    pub meal_type: Option<String>,
}

impl RecipeDetail {
    /// Display text of every ingredient line, in recipe order
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        self.extended_ingredients.iter().map(IngredientLine::display)
    }
}

/// Raw body of the recipe information endpoint. Every field is optional
/// so that validation can name what is missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecipeInformation {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub extended_ingredients: Option<Vec<IngredientLine>>,
    pub instructions: Option<String>,
    pub source_url: Option<String>,
}

fn decode_html_symbols(text: &str) -> String {
    // API text is sometimes encoded twice
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

impl RecipeInformation {
    /// Validate the required fields and build a [`RecipeDetail`].
    ///
    /// `requested_id` is the id the information was fetched for; it is used
    /// when the body does not repeat it.
    pub(crate) fn into_detail(self, requested_id: i64) -> Result<RecipeDetail, RecipeError> {
        let id = self.id.unwrap_or(requested_id);
        let missing = |field: &'static str| RecipeError::MissingField {
            id: id.to_string(),
            field,
        };

        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| missing("title"))?;
        let extended_ingredients = self
            .extended_ingredients
            .filter(|lines| !lines.is_empty())
            .ok_or_else(|| missing("extendedIngredients"))?;
        let instructions = self
            .instructions
            .filter(|i| !i.trim().is_empty())
            .ok_or_else(|| missing("instructions"))?;

        let extended_ingredients = extended_ingredients
            .into_iter()
            .map(|line| IngredientLine {
                original: line.original.as_deref().map(decode_html_symbols),
                name: line.name,
            })
            .collect();

        Ok(RecipeDetail {
            id: Some(RecipeId::Api(id)),
            title: decode_html_symbols(&title),
            image: self.image,
            extended_ingredients,
            instructions,
            source_url: self.source_url.filter(|url| !url.is_empty()),
            meal_type: None,
        })
    }
}

/// Where a saved recipe came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Api,
}

/// A recipe stored in a [`crate::collection::RecipeCollection`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedRecipe {
    pub id: RecipeId,
    pub title: String,
    pub image: String,
    /// Display lines, in recipe order
    pub ingredients: Vec<String>,
    /// Lowercased ingredient names, in recipe order
    pub ingredient_names: Vec<String>,
    pub instructions: String,
    pub meal_type: String,
    pub source: RecipeSource,
}
