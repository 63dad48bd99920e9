use std::fmt;

use chrono::{DateTime, Utc};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

use super::{IngredientDTO, Validate, WhichDiets, require_text};
use crate::error::{ValidationError, ValidationResult};

/// Recipe as served by `GET /recipe/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeDTO {
    pub name: String,
    /// Serialized rich-text document
    pub description: String,
    pub ingredients: Vec<IngredientWithAmountDTO>,
    /// One serialized rich-text document per step
    pub steps: Vec<String>,
    pub servings: ServingsDTO,
    pub time: DurationTable,
    /// Offsets are normalised to UTC, so re-serializing yields a `Z` suffix
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub diet_violations: WhichDiets,
}

impl Validate for RecipeDTO {
    fn validate(&self) -> ValidationResult<()> {
        require_text("name", &self.name)?;
        self.servings.validate()?;
        self.ingredients.validate()
    }
}

/// How many people a recipe serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingsDTO {
    Exact(u16),
    FromTo(u16, u16),
}

impl Validate for ServingsDTO {
    fn validate(&self) -> ValidationResult<()> {
        match *self {
            ServingsDTO::FromTo(from, to) if from > to => {
                Err(ValidationError::InvalidServings { from, to })
            }
            _ => Ok(()),
        }
    }
}

/// An ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientWithAmountDTO {
    pub ingredient: IngredientDTO,
    pub amount: IngredientUnitDTO,
    #[serde(default)]
    pub notes: Option<String>,
    pub optional: bool,
}

impl Validate for IngredientWithAmountDTO {
    fn validate(&self) -> ValidationResult<()> {
        self.ingredient.validate()?;

        let amount = self.amount.amount();
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::InvalidAmount(
                amount,
                self.ingredient.name.clone(),
            ));
        }

        Ok(())
    }
}

/// Quantity of an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientUnitDTO {
    Mililiters(f64),
    Grams(f64),
    Teaspoons(f64),
    Cup(f64),
    Other { amount: f64, unit: String },
}

impl IngredientUnitDTO {
    pub fn amount(&self) -> f64 {
        match self {
            IngredientUnitDTO::Mililiters(amount)
            | IngredientUnitDTO::Grams(amount)
            | IngredientUnitDTO::Teaspoons(amount)
            | IngredientUnitDTO::Cup(amount)
            | IngredientUnitDTO::Other { amount, .. } => *amount,
        }
    }
}

/// Mapping from duration kind (e.g. "prep") to seconds
///
/// Entries keep the order in which they appeared in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationTable(Vec<(String, u64)>);

impl DurationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, replacing the value of an existing kind in place
    pub fn insert(&mut self, kind: impl Into<String>, seconds: u64) {
        let kind = kind.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == kind) {
            Some(entry) => entry.1 = seconds,
            None => self.0.push((kind, seconds)),
        }
    }

    pub fn get(&self, kind: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(existing, _)| existing == kind)
            .map(|(_, seconds)| *seconds)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(kind, seconds)| (kind.as_str(), *seconds))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for DurationTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (kind, seconds) in iter {
            table.insert(kind, seconds);
        }
        table
    }
}

impl Serialize for DurationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (kind, seconds) in &self.0 {
            map.serialize_entry(kind, seconds)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DurationTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = DurationTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of duration kinds to seconds")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, u64)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((kind, seconds)) = access.next_entry::<String, u64>()? {
                    if entries.iter().any(|(existing, _)| *existing == kind) {
                        return Err(de::Error::custom(format!(
                            "duplicate duration kind `{kind}`"
                        )));
                    }
                    entries.push((kind, seconds));
                }
                Ok(DurationTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
