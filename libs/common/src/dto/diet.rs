use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

/// Diets an ingredient or recipe can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Vegan,
    Vegetarian,
    GlutenFree,
}

/// Set of diet tags, serialized as a JSON array
pub type WhichDiets = BTreeSet<Diet>;

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::Vegan, Diet::Vegetarian, Diet::GlutenFree];

    /// Wire name of the diet
    pub const fn as_str(self) -> &'static str {
        match self {
            Diet::Vegan => "vegan",
            Diet::Vegetarian => "vegetarian",
            Diet::GlutenFree => "gluten_free",
        }
    }

    /// Human readable name
    pub const fn label(self) -> &'static str {
        match self {
            Diet::Vegan => "Vegan",
            Diet::Vegetarian => "Vegetarian",
            Diet::GlutenFree => "Gluten free",
        }
    }

    /// Look up a diet by its wire name
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|diet| diet.as_str() == value)
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
