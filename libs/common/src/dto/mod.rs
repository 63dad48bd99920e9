//! Data transfer objects exchanged with the backend API
//!
//! Every payload crossing the frontend/backend boundary is deserialized into
//! one of these types and then checked with [`Validate`]. Unknown fields are
//! rejected, so a payload is either accepted exactly as declared or refused.

use serde::de::DeserializeOwned;

use crate::error::{ValidationError, ValidationResult};

mod diet;
mod ingredient;
mod recipe;

pub use diet::{Diet, WhichDiets};
pub use ingredient::{CreateIngredientDTO, IngredientDTO};
pub use recipe::{DurationTable, IngredientUnitDTO, IngredientWithAmountDTO, RecipeDTO, ServingsDTO};

/// Semantic checks that run after a payload has been deserialized
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> ValidationResult<()> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Deserialize a JSON body and validate it in one step
pub fn parse_json<T>(body: &[u8]) -> ValidationResult<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body)?;
    value.validate()?;
    Ok(value)
}

/// Reject blank text fields
pub(crate) fn require_text(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(())
}
