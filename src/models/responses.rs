use serde::{Deserialize, Serialize};
use crate::models::domain::{RecipeMatch, User};

/// Response for the recipe suggestions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub recipes: Vec<RecipeMatch>,
    pub message: Option<String>,
}

/// Response for recipe search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub recipes: Vec<RecipeMatch>,
}

/// Response carrying a freshly issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Generic acknowledgement with a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
