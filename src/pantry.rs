use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// One row of the pantry table. Only the item name is read here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PantryRow {
    #[serde(rename = "Item Name", default)]
    pub item_name: Option<String>,
}

impl PantryRow {
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: Some(item_name.into()),
        }
    }
}

/// Read-only view of the ingredients a user currently owns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PantrySnapshot {
    rows: Vec<PantryRow>,
}

impl PantrySnapshot {
    pub fn new(rows: Vec<PantryRow>) -> Self {
        Self { rows }
    }

    /// Build a snapshot with one row per item name
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: items.into_iter().map(PantryRow::new).collect(),
        }
    }

    /// Parse a JSON array of objects carrying an `"Item Name"` key
    pub fn from_json_str(json: &str) -> Result<Self, RecipeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a pantry JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecipeError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn rows(&self) -> &[PantryRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Lowercased item names, skipping rows whose name is missing or blank
    pub fn lowercase_names(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.item_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

/// Owner of the pantry table
pub trait PantryManager {
    /// Current contents of the pantry
    fn pantry(&self) -> PantrySnapshot;
}

/// Pantry held in memory for the lifetime of a session
#[derive(Debug, Clone, Default)]
pub struct InMemoryPantry {
    snapshot: PantrySnapshot,
}

impl InMemoryPantry {
    pub fn new(snapshot: PantrySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn add_item(&mut self, item_name: impl Into<String>) {
        self.snapshot.rows.push(PantryRow::new(item_name));
    }

    /// Remove every row whose name matches, ignoring case
    pub fn remove_item(&mut self, item_name: &str) {
        let target = item_name.to_lowercase();
        self.snapshot.rows.retain(|row| {
            row.item_name
                .as_deref()
                .map_or(true, |name| name.to_lowercase() != target)
        });
    }
}

impl PantryManager for InMemoryPantry {
    fn pantry(&self) -> PantrySnapshot {
        self.snapshot.clone()
    }
}
