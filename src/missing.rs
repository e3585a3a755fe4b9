use crate::pantry::PantrySnapshot;

/// Ingredients not covered by the pantry, in their original order and text.
///
/// An ingredient counts as present when some pantry item name, lowercased,
/// is a substring of the ingredient text lowercased. So pantry item "onion"
/// covers "2 red onions, diced", but pantry item "red onions" does not cover
/// "1 onion". Blank pantry names are ignored.
pub fn missing_ingredients<I, S>(ingredients: I, pantry: &PantrySnapshot) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pantry_items = pantry.lowercase_names();

    ingredients
        .into_iter()
        .filter(|ingredient| {
            let text = ingredient.as_ref().to_lowercase();
            !pantry_items.iter().any(|item| text.contains(item.as_str()))
        })
        .map(|ingredient| ingredient.as_ref().to_string())
        .collect()
}
