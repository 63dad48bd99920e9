use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Validate, WhichDiets, require_text};
use crate::error::ValidationResult;

/// Ingredient as served by `GET /ingredient` and `GET /ingredient/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngredientDTO {
    pub id: Uuid,
    pub name: String,
    /// Serialized rich-text document
    pub description: String,
    pub diet_violations: WhichDiets,
}

impl Validate for IngredientDTO {
    fn validate(&self) -> ValidationResult<()> {
        require_text("name", &self.name)
    }
}

/// Body of `POST /ingredient/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateIngredientDTO {
    pub name: String,
    /// Serialized rich-text document, forwarded as-is
    pub description: String,
    #[serde(
        rename = "dietFriendly",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub diet_friendly: Option<WhichDiets>,
}

impl Validate for CreateIngredientDTO {
    fn validate(&self) -> ValidationResult<()> {
        require_text("name", &self.name)?;
        require_text("description", &self.description)
    }
}
