use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

const DEFAULT_COUNT: usize = 5;

fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_'], " ")
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every accepted value, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value as the recipe API expects it
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize_key(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == key)
                    .ok_or_else(|| format!("Unknown {}: {}", $kind, s))
            }
        }
    };
}

vocabulary! {
    /// Dietary preference
    Diet, "diet" {
        Vegetarian => "vegetarian",
        Vegan => "vegan",
        Pescetarian => "pescetarian",
        Ketogenic => "ketogenic",
        GlutenFree => "gluten free",
    }
}

vocabulary! {
    /// Allergy or intolerance to exclude
    Intolerance, "intolerance" {
        Dairy => "dairy",
        Egg => "egg",
        Gluten => "gluten",
        Grain => "grain",
        Peanut => "peanut",
        Seafood => "seafood",
        Sesame => "sesame",
        Shellfish => "shellfish",
        Soy => "soy",
        Sulfite => "sulfite",
        TreeNut => "tree nut",
        Wheat => "wheat",
    }
}

vocabulary! {
    /// Meal type, sent to the API as `type`
    MealType, "meal type" {
        MainCourse => "main course",
        SideDish => "side dish",
        Dessert => "dessert",
        Appetizer => "appetizer",
        Salad => "salad",
        Bread => "bread",
        Breakfast => "breakfast",
        Soup => "soup",
        Beverage => "beverage",
        Sauce => "sauce",
        Marinade => "marinade",
    }
}

/// Restrictions applied to a recipe search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeFilter {
    pub diet: Option<Diet>,
    pub intolerances: BTreeSet<Intolerance>,
    pub meal_type: Option<MealType>,
    count: usize,
}

impl Default for RecipeFilter {
    fn default() -> Self {
        Self {
            diet: None,
            intolerances: BTreeSet::new(),
            meal_type: None,
            count: DEFAULT_COUNT,
        }
    }
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diet(mut self, diet: Diet) -> Self {
        self.diet = Some(diet);
        self
    }

    pub fn intolerance(mut self, intolerance: Intolerance) -> Self {
        self.intolerances.insert(intolerance);
        self
    }

    pub fn intolerances(mut self, intolerances: impl IntoIterator<Item = Intolerance>) -> Self {
        self.intolerances.extend(intolerances);
        self
    }

    pub fn meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Number of recipes wanted; values below 1 are raised to 1
    pub fn count(mut self, count: usize) -> Self {
        self.count = count.max(1);
        self
    }

    pub fn recipe_count(&self) -> usize {
        self.count
    }

    /// Number of search hits to request: twice the wanted count, capped,
    /// so that a few failed detail lookups still leave enough recipes
    pub fn search_result_count(&self, cap: usize) -> usize {
        self.count.saturating_mul(2).min(cap)
    }

    /// Intolerances joined the way the API expects them
    pub fn intolerances_param(&self) -> Option<String> {
        if self.intolerances.is_empty() {
            return None;
        }
        Some(
            self.intolerances
                .iter()
                .map(Intolerance::as_str)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}
