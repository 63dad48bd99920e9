//! HTML pages
//!
//! Pages are plain server-rendered markup built from validated DTOs. All
//! text coming from the backend goes through [`escape`].

use axum::response::Html;
use common::dto::{Diet, IngredientDTO, IngredientWithAmountDTO, RecipeDTO, WhichDiets};

use crate::{
    error::{FrontendError, FrontendResult},
    format::{date_text, format_amount, make_title, recipe_metadata},
    rich_text::RichText,
};

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"><title>{}</title></head>\
         <body><nav><a href=\"/\">Home</a> <a href=\"/ingredient\">Ingredients</a></nav>\
         <main>{body}</main></body>\
         </html>",
        escape(title)
    ))
}

/// Which kind of page a diet list is shown on
#[derive(Debug, Clone, Copy)]
pub enum DietListKind {
    Ingredient,
    Recipe,
}

fn diet_list(diets: &WhichDiets, kind: DietListKind) -> String {
    let subject = match kind {
        DietListKind::Ingredient => "ingredient",
        DietListKind::Recipe => "recipe",
    };

    let items: String = Diet::ALL
        .into_iter()
        .map(|diet| {
            let verdict = if diets.contains(&diet) { "no" } else { "yes" };
            format!(
                "<li class=\"diet-{verdict}\">{}: {verdict}</li>",
                diet.label()
            )
        })
        .collect();

    format!("<aside><h2>Is this {subject} suitable for</h2><ul>{items}</ul></aside>")
}

pub fn home() -> Html<String> {
    layout(
        &make_title(None),
        "<h1>deepdish</h1>\
         <ul>\
         <li><a href=\"/ingredient\">Browse ingredients</a></li>\
         <li><a href=\"/ingredient/create\">Create an ingredient</a></li>\
         </ul>",
    )
}

pub fn ingredient_list(ingredients: &[IngredientDTO]) -> Html<String> {
    let items: String = ingredients
        .iter()
        .map(|ingredient| {
            format!(
                "<li><a href=\"/ingredient/{}\">{}</a></li>",
                ingredient.id,
                escape(&ingredient.name)
            )
        })
        .collect();

    layout(
        &make_title(Some("Ingredients")),
        &format!("<h1>Ingredients</h1><ul>{items}</ul>"),
    )
}

fn ingredient_body(ingredient: &IngredientDTO) -> String {
    let description = RichText::parse_or_plain(&ingredient.description);

    let mut body = format!(
        "<h1>{}</h1>{}",
        escape(&ingredient.name),
        diet_list(&ingredient.diet_violations, DietListKind::Ingredient)
    );

    if !description.is_empty() {
        body.push_str(&format!("<section>{}</section>", description.to_html()));
    }

    body
}

pub fn ingredient_page(ingredient: &IngredientDTO) -> Html<String> {
    layout(&make_title(Some(&ingredient.name)), &ingredient_body(ingredient))
}

fn ingredient_line(line: &IngredientWithAmountDTO) -> String {
    let mut item = format!(
        "{} <a href=\"/ingredient/{}\">{}</a>",
        escape(&format_amount(&line.amount)),
        line.ingredient.id,
        escape(&line.ingredient.name)
    );

    if line.optional {
        item.push_str(" (optional)");
    }

    if let Some(notes) = line.notes.as_deref().filter(|notes| !notes.trim().is_empty()) {
        item.push_str(&format!(", {}", escape(notes)));
    }

    format!("<li>{item}</li>")
}

/// Recipe page; every step must be a well-formed document
pub fn recipe_page(recipe: &RecipeDTO) -> FrontendResult<Html<String>> {
    let steps = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let document = RichText::parse(step).map_err(|source| {
                FrontendError::InvalidDocument {
                    field: "steps",
                    source,
                }
            })?;
            Ok(format!("<h3>Step {}</h3>{}", index + 1, document.to_html()))
        })
        .collect::<FrontendResult<String>>()?;

    let metadata: String = recipe_metadata(recipe)
        .iter()
        .map(|(label, value)| format!("<li><b>{}</b>: {}</li>", escape(label), escape(value)))
        .collect();

    let ingredients: String = recipe.ingredients.iter().map(ingredient_line).collect();

    let body = format!(
        "{diets}<h1>{name}</h1><p class=\"date\">{date}</p>\
         <section>{description}</section>\
         <ul class=\"metadata\">{metadata}</ul>\
         <h2>Ingredients</h2><ul>{ingredients}</ul>\
         <h2>Steps</h2>{steps}",
        diets = diet_list(&recipe.diet_violations, DietListKind::Recipe),
        name = escape(&recipe.name),
        date = escape(&date_text(&recipe.created_at, &recipe.updated_at)),
        description = RichText::parse_or_plain(&recipe.description).to_html(),
    );

    Ok(layout(&make_title(Some(&recipe.name)), &body))
}

/// Ingredient creation form, followed by the last created ingredient if any
pub fn create_ingredient_form(created: Option<&IngredientDTO>) -> Html<String> {
    let diets: String = Diet::ALL
        .into_iter()
        .map(|diet| {
            format!(
                "<label><input type=\"checkbox\" name=\"dietFriendly\" value=\"{}\"> {}</label>",
                diet.as_str(),
                diet.label()
            )
        })
        .collect();

    let result = created
        .map(|ingredient| {
            format!(
                "<article><h2>Created</h2>{}</article>",
                ingredient_body(ingredient)
            )
        })
        .unwrap_or_default();

    layout(
        &make_title(Some("Create ingredient")),
        &format!(
            "<h1>Creating a new ingredient</h1>{result}\
             <form method=\"post\" action=\"/ingredient/create\">\
             <label for=\"name\">Ingredient name</label>\
             <input id=\"name\" name=\"name\" placeholder=\"Name\" autocomplete=\"off\">\
             <label for=\"description\">Description</label>\
             <textarea id=\"description\" name=\"description\"></textarea>\
             <fieldset><legend>Suitable for</legend>{diets}</fieldset>\
             <button type=\"submit\">Submit</button>\
             </form>"
        ),
    )
}
