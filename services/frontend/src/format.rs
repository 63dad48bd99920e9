//! Presentation formatting helpers

use chrono::{DateTime, Utc};
use common::dto::{IngredientUnitDTO, RecipeDTO, ServingsDTO};

const APP_NAME: &str = "deepdish";

/// `hh:mma, dd LLL yyyy`, e.g. "03:05PM, 07 Mar 2024"
const DATE_FORMAT: &str = "%I:%M%p, %d %b %Y";

const DURATION_UNITS: [(u64, &str); 4] = [
    (86_400, "day"),
    (3_600, "hour"),
    (60, "minute"),
    (1, "second"),
];

/// Page title for a named page, or the bare application name
pub fn make_title(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("{} | {APP_NAME}", name.trim()),
        _ => APP_NAME.to_string(),
    }
}

/// Human label for a number of seconds, e.g. "1 hour 30 minutes"
///
/// Zero units are left out, so zero seconds gives an empty label.
pub fn format_duration(seconds: u64) -> String {
    let mut remaining = seconds;
    let mut parts = Vec::new();

    for (size, unit) in DURATION_UNITS {
        let count = remaining / size;
        remaining %= size;

        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{count} {unit}{plural}"));
        }
    }

    parts.join(" ")
}

/// "Created at …", with the update time only when it differs
pub fn date_text(created: &DateTime<Utc>, updated: &DateTime<Utc>) -> String {
    let mut text = format!("Created at {}", created.format(DATE_FORMAT));

    if created != updated {
        text.push_str(&format!(" (updated at {})", updated.format(DATE_FORMAT)));
    }

    text
}

pub fn format_servings(servings: &ServingsDTO) -> String {
    match servings {
        ServingsDTO::Exact(count) => count.to_string(),
        ServingsDTO::FromTo(lower, upper) => format!("between {lower} and {upper}"),
    }
}

pub fn format_amount(amount: &IngredientUnitDTO) -> String {
    match amount {
        IngredientUnitDTO::Mililiters(amount) => format!("{amount} ml"),
        IngredientUnitDTO::Grams(amount) => format!("{amount} g"),
        IngredientUnitDTO::Teaspoons(amount) => format!("{amount} tsp"),
        IngredientUnitDTO::Cup(amount) if *amount == 1.0 => "1 cup".to_string(),
        IngredientUnitDTO::Cup(amount) => format!("{amount} cups"),
        IngredientUnitDTO::Other { amount, unit } => format!("{amount} {unit}"),
    }
}

/// Label/value pairs shown next to a recipe
///
/// Time entries come first, in the order the backend sent them, followed by
/// the serving count.
// TODO: sort time entries once the backend defines an order for duration kinds
pub fn recipe_metadata(recipe: &RecipeDTO) -> Vec<(String, String)> {
    recipe
        .time
        .iter()
        .map(|(kind, seconds)| (kind.to_string(), format_duration(seconds)))
        .chain(std::iter::once((
            "Serves".to_string(),
            format_servings(&recipe.servings),
        )))
        .collect()
}
