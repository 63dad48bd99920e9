//! Application state shared across handlers

use crate::client::BackendClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}
