use std::collections::HashSet;

use crate::pantry::PantrySnapshot;

/// Clean one pantry item name into a search term.
///
/// Lowercases, drops every character that is not a word character
/// (alphanumeric or `_`), whitespace or `-`, then trims. Returns `None`
/// when nothing is left.
pub fn clean_item_name(item: &str) -> Option<String> {
    let cleaned: String = item
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Turn a pantry snapshot into deduplicated search terms, in the order
/// each term is first seen.
pub fn normalize_pantry(pantry: &PantrySnapshot) -> Vec<String> {
    let mut seen = HashSet::new();
    pantry
        .rows()
        .iter()
        .filter_map(|row| row.item_name.as_deref())
        .filter_map(clean_item_name)
        .filter(|term| seen.insert(term.clone()))
        .collect()
}
