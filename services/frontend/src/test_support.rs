//! Stub backend helpers shared by the frontend tests

use axum::Router;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const TOMATO_ID: &str = "0190f7c4-5b1e-7d3a-9c2f-1a2b3c4d5e6f";
pub const GARLIC_ID: &str = "0190f7c4-5b1e-7d3a-9c2f-000000000002";

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}

/// Base URL of a local port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}

/// A rich-text document with a single paragraph
pub fn document(text: &str) -> String {
    json!({
        "root": {
            "type": "root",
            "children": [
                {
                    "type": "paragraph",
                    "children": [{ "type": "text", "text": text, "format": 0 }]
                }
            ]
        }
    })
    .to_string()
}

pub fn ingredient_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": document(&format!("{name} is delicious")),
        "diet_violations": ["vegan"]
    })
}

pub fn recipe_json() -> Value {
    json!({
        "name": "Shakshuka",
        "description": document("Eggs poached in a spicy tomato sauce"),
        "ingredients": [
            {
                "ingredient": ingredient_json(TOMATO_ID, "Tomato"),
                "amount": { "grams": 400.0 },
                "notes": "canned is fine",
                "optional": false
            },
            {
                "ingredient": ingredient_json(GARLIC_ID, "Garlic"),
                "amount": { "other": { "amount": 2.0, "unit": "cloves" } },
                "notes": null,
                "optional": true
            }
        ],
        "steps": [document("Simmer the tomatoes"), document("Crack in the eggs")],
        "servings": { "from_to": [2, 3] },
        "time": { "prep": 600, "cook": 1500 },
        "created_at": "2024-03-07T15:05:00Z",
        "updated_at": "2024-03-07T15:05:00Z",
        "diet_violations": ["vegan"]
    })
}
