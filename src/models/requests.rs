use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(length(min = 1))]
    pub name: String,
}

/// Request to log in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to add a pantry item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPantryItemRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[serde(alias = "category_id", rename = "categoryId")]
    pub category_id: Option<i32>,
    #[serde(alias = "expiry_date", rename = "expiryDate")]
    pub expiry_date: Option<chrono::NaiveDate>,
}

/// Partial update for a pantry item; absent fields keep their value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePantryItemRequest {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[serde(alias = "category_id", rename = "categoryId")]
    pub category_id: Option<i32>,
    #[serde(alias = "expiry_date", rename = "expiryDate")]
    pub expiry_date: Option<chrono::NaiveDate>,
}

/// Request to bookmark a recipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveRecipeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "recipe_api_id", rename = "recipeApiId")]
    pub recipe_api_id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(alias = "image_url", rename = "imageUrl")]
    pub image_url: Option<String>,
}
