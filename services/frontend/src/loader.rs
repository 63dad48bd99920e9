//! Route loaders and actions
//!
//! Each loader issues at most one request to the backend and yields either a
//! validated DTO or `None`. What to do with `None` is up to the route.

use common::dto::{CreateIngredientDTO, IngredientDTO, RecipeDTO};
use tracing::{debug, instrument};

use crate::{client::BackendClient, error::FrontendResult};

/// Treat a blank or dot-segment path parameter the same as a missing one
///
/// `.` and `..` would be normalised away when joined onto the backend URL
/// and address a different resource.
fn present(id: Option<&str>) -> Option<&str> {
    id.map(str::trim)
        .filter(|id| !id.is_empty() && *id != "." && *id != "..")
}

/// Load every ingredient
#[instrument(name = "load ingredients", skip(client))]
pub async fn load_ingredients(
    client: &BackendClient,
) -> FrontendResult<Option<Vec<IngredientDTO>>> {
    client.get_optional(&["ingredient"]).await
}

/// Load a single ingredient
#[instrument(name = "load ingredient", skip(client))]
pub async fn load_ingredient(
    client: &BackendClient,
    id: Option<&str>,
) -> FrontendResult<Option<IngredientDTO>> {
    let Some(id) = present(id) else {
        debug!("No ingredient id, skipping fetch");
        return Ok(None);
    };

    client.get_optional(&["ingredient", id]).await
}

/// Load a single recipe
#[instrument(name = "load recipe", skip(client))]
pub async fn load_recipe(
    client: &BackendClient,
    id: Option<&str>,
) -> FrontendResult<Option<RecipeDTO>> {
    let Some(id) = present(id) else {
        debug!("No recipe id, skipping fetch");
        return Ok(None);
    };

    client.get_optional(&["recipe", id]).await
}

/// Forward a validated creation payload and return the stored ingredient
#[instrument(name = "create ingredient", skip(client, ingredient), fields(name = %ingredient.name))]
pub async fn create_ingredient(
    client: &BackendClient,
    ingredient: &CreateIngredientDTO,
) -> FrontendResult<IngredientDTO> {
    client.post_json(&["ingredient", "create"], ingredient).await
}
