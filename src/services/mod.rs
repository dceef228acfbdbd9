// Service exports
pub mod mealdb;
pub mod postgres;
pub mod spoonacular;

use thiserror::Error;

/// Errors that can occur when talking to an external recipe provider
///
/// These never reach a client of the suggestions endpoint; the merge
/// boundary downgrades a failed provider to an empty contribution.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

pub use mealdb::MealDbClient;
pub use postgres::{PantryStore, StoreError};
pub use spoonacular::SpoonacularClient;
