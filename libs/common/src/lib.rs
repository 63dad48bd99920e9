//! Common library for the deepdish services
//!
//! This crate provides shared functionality used by the frontend and the
//! auxiliary services: the DTOs exchanged with the backend API and their
//! validation, configuration loading, error types and tracing setup.

pub mod config;
pub mod dto;
pub mod error;
pub mod telemetry;

/// Example usage of the DTO validation layer
///
/// ```rust
/// use common::dto::{IngredientDTO, parse_json};
///
/// let body = br#"{
///     "id": "00000000-0000-0000-0000-000000000000",
///     "name": "Tomato",
///     "description": "Tomatoes are very squishy",
///     "diet_violations": []
/// }"#;
///
/// let ingredient: IngredientDTO = parse_json(body).expect("valid ingredient");
/// assert_eq!(ingredient.name, "Tomato");
/// ```
pub fn example_usage() {}
