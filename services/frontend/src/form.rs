//! Form submission marshalling
//!
//! Turns the raw fields of a submitted form into a validated
//! [`CreateIngredientDTO`]. The description is an already serialized
//! rich-text document and is carried through untouched.

use common::{
    dto::{CreateIngredientDTO, Diet, Validate, WhichDiets},
    error::ValidationError,
};
use thiserror::Error;

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const DIET_FRIENDLY: &str = "dietFriendly";

/// Error raised when a submitted form does not describe a valid payload
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Missing required field {0}")]
    MissingField(&'static str),

    #[error("Field {0} was submitted more than once")]
    DuplicateField(&'static str),

    #[error("Unknown field {0}")]
    UnknownField(String),

    #[error("{0} is not a known diet")]
    UnknownDiet(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Build a creation payload from submitted form fields
///
/// Fields arrive in submission order; `dietFriendly` may repeat, every other
/// field must appear at most once.
pub fn marshal_create_ingredient<I, K, V>(fields: I) -> Result<CreateIngredientDTO, FormError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut name = None;
    let mut description = None;
    let mut diet_friendly: Option<WhichDiets> = None;

    for (key, value) in fields {
        match key.as_ref() {
            NAME => set_once(&mut name, NAME, value.into())?,
            DESCRIPTION => set_once(&mut description, DESCRIPTION, value.into())?,
            DIET_FRIENDLY => {
                let value = value.into();
                let diets = diet_friendly.get_or_insert_with(WhichDiets::new);
                if value.is_empty() {
                    continue;
                }
                let diet = Diet::parse(&value).ok_or(FormError::UnknownDiet(value))?;
                diets.insert(diet);
            }
            other => return Err(FormError::UnknownField(other.to_string())),
        }
    }

    let ingredient = CreateIngredientDTO {
        name: name.ok_or(FormError::MissingField(NAME))?,
        description: description.ok_or(FormError::MissingField(DESCRIPTION))?,
        diet_friendly,
    };

    ingredient.validate()?;

    Ok(ingredient)
}

fn set_once(
    slot: &mut Option<String>,
    field: &'static str,
    value: String,
) -> Result<(), FormError> {
    if slot.is_some() {
        return Err(FormError::DuplicateField(field));
    }

    *slot = Some(value);
    Ok(())
}
