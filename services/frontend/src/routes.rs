//! Frontend routes

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{error::FrontendResult, form, loader, state::AppState, views};

/// Create the router for the frontend service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/ingredient", get(ingredient_index))
        .route(
            "/ingredient/create",
            get(create_ingredient_form).post(create_ingredient),
        )
        .route("/ingredient/:id", get(ingredient))
        .route("/recipe", get(recipe_without_id))
        .route("/recipe/:id", get(recipe))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Where every absent resource sends the user
fn go_home() -> Response {
    Redirect::to("/").into_response()
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "frontend"
    }))
}

pub async fn home() -> impl IntoResponse {
    views::home()
}

/// List every ingredient
pub async fn ingredient_index(State(state): State<AppState>) -> FrontendResult<Response> {
    Ok(match loader::load_ingredients(&state.backend).await? {
        Some(ingredients) => views::ingredient_list(&ingredients).into_response(),
        None => go_home(),
    })
}

/// Show a single ingredient
pub async fn ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> FrontendResult<Response> {
    Ok(match loader::load_ingredient(&state.backend, Some(&id)).await? {
        Some(ingredient) => views::ingredient_page(&ingredient).into_response(),
        None => go_home(),
    })
}

/// Show a single recipe
pub async fn recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> FrontendResult<Response> {
    Ok(match loader::load_recipe(&state.backend, Some(&id)).await? {
        Some(recipe) => views::recipe_page(&recipe)?.into_response(),
        None => go_home(),
    })
}

/// `/recipe` without an id behaves like an unknown recipe
pub async fn recipe_without_id(State(state): State<AppState>) -> FrontendResult<Response> {
    Ok(match loader::load_recipe(&state.backend, None).await? {
        Some(recipe) => views::recipe_page(&recipe)?.into_response(),
        None => go_home(),
    })
}

pub async fn create_ingredient_form() -> impl IntoResponse {
    views::create_ingredient_form(None)
}

/// Validate the submitted form and forward it to the backend
pub async fn create_ingredient(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> FrontendResult<Response> {
    let payload = form::marshal_create_ingredient(fields)?;
    let created = loader::create_ingredient(&state.backend, &payload).await?;

    info!(id = %created.id, "Created ingredient {}", created.name);

    Ok(views::create_ingredient_form(Some(&created)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::BackendClient, test_support};
    use axum::{http::StatusCode, routing::post};
    use reqwest::{header::LOCATION, redirect::Policy};
    use serde_json::Value;

    /// Start the frontend against a stub backend
    async fn spawn_frontend(backend: Router) -> (String, reqwest::Client) {
        let backend_url = test_support::spawn(backend).await;
        let state = AppState {
            backend: BackendClient::new(&backend_url).unwrap(),
        };
        let frontend_url = test_support::spawn(create_router(state)).await;
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();
        (frontend_url, client)
    }

    fn stub_backend() -> Router {
        Router::new()
            .route(
                "/ingredient",
                get(|| async {
                    Json(json!([test_support::ingredient_json(
                        test_support::TOMATO_ID,
                        "Tomato"
                    )]))
                }),
            )
            .route(
                "/ingredient/:id",
                get(|Path(id): Path<String>| async move {
                    if id == test_support::TOMATO_ID {
                        Json(test_support::ingredient_json(&id, "Tomato")).into_response()
                    } else {
                        StatusCode::NOT_FOUND.into_response()
                    }
                }),
            )
            .route(
                "/recipe/:id",
                get(|Path(id): Path<String>| async move {
                    match id.as_str() {
                        "1" => Json(test_support::recipe_json()).into_response(),
                        "broken" => {
                            let mut recipe = test_support::recipe_json();
                            recipe["servings"] = json!({"from_to": [4, 1]});
                            Json(recipe).into_response()
                        }
                        _ => StatusCode::NOT_FOUND.into_response(),
                    }
                }),
            )
            .route(
                "/ingredient/create",
                post(|Json(body): Json<Value>| async move {
                    let name = body["name"].as_str().unwrap_or_default().to_string();
                    (
                        StatusCode::CREATED,
                        Json(test_support::ingredient_json(test_support::GARLIC_ID, &name)),
                    )
                }),
            )
    }

    fn assert_redirects_home(response: &reqwest::Response) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
    }

    #[tokio::test]
    async fn health_check_reports_service() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let body: Value = client
            .get(format!("{base}/health"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["service"], "frontend");
    }

    #[tokio::test]
    async fn renders_ingredient_index() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let response = client.get(format!("{base}/ingredient")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = response.text().await.unwrap();
        assert!(page.contains(&format!(
            "<a href=\"/ingredient/{}\">Tomato</a>",
            test_support::TOMATO_ID
        )));
    }

    #[tokio::test]
    async fn renders_ingredient() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let response = client
            .get(format!("{base}/ingredient/{}", test_support::TOMATO_ID))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = response.text().await.unwrap();
        assert!(page.contains("<title>Tomato | deepdish</title>"));
        assert!(page.contains("<p>Tomato is delicious</p>"));
    }

    #[tokio::test]
    async fn unknown_ingredient_redirects_home() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let response = client
            .get(format!("{base}/ingredient/unknown"))
            .send()
            .await
            .unwrap();
        assert_redirects_home(&response);
    }

    #[tokio::test]
    async fn renders_recipe() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let response = client.get(format!("{base}/recipe/1")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = response.text().await.unwrap();
        assert!(page.contains("<h1>Shakshuka</h1>"));
        assert!(page.contains("between 2 and 3"));
    }

    #[tokio::test]
    async fn missing_or_unknown_recipe_redirects_home() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        for path in ["/recipe", "/recipe/404"] {
            let response = client.get(format!("{base}{path}")).send().await.unwrap();
            assert_redirects_home(&response);
        }
    }

    #[tokio::test]
    async fn malformed_recipe_is_a_bad_gateway() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let response = client
            .get(format!("{base}/recipe/broken"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body: Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("serving range"));
    }

    #[tokio::test]
    async fn unreachable_backend_redirects_home() {
        let state = AppState {
            backend: BackendClient::new(&test_support::closed_port_url().await).unwrap(),
        };
        let base = test_support::spawn(create_router(state)).await;
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();

        let response = client.get(format!("{base}/ingredient")).send().await.unwrap();
        assert_redirects_home(&response);
    }

    #[tokio::test]
    async fn renders_create_form() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let page = client
            .get(format!("{base}/ingredient/create"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert!(page.contains("<form method=\"post\" action=\"/ingredient/create\">"));
    }

    #[tokio::test]
    async fn create_action_forwards_to_backend() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let response = client
            .post(format!("{base}/ingredient/create"))
            .form(&[
                ("name", "Garlic"),
                ("description", test_support::document("Pungent").as_str()),
                ("dietFriendly", "vegan"),
                ("dietFriendly", "vegetarian"),
            ])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = response.text().await.unwrap();
        assert!(page.contains("<h2>Created</h2><h1>Garlic</h1>"));
    }

    #[tokio::test]
    async fn create_action_rejects_invalid_form() {
        let (base, client) = spawn_frontend(stub_backend()).await;

        let response = client
            .post(format!("{base}/ingredient/create"))
            .form(&[("name", "Garlic"), ("dietFriendly", "carnivore")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("carnivore"));
    }
}
