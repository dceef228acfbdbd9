use serde::{Deserialize, Serialize};

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Pantry item category (seeded reference data)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A tracked pantry item with quantity and optional expiry date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: i32,
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<i32>,
    #[serde(rename = "categoryName", default)]
    pub category_name: Option<String>,
    #[serde(rename = "categoryIcon", default)]
    pub category_icon: Option<String>,
    #[serde(rename = "expiryDate", default)]
    pub expiry_date: Option<chrono::NaiveDate>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A single recipe ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Where a recipe came from
///
/// Every recipe carries an explicit source tag; provenance is never
/// inferred from the shape of the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Spoonacular,
    #[serde(rename = "mealdb")]
    MealDb,
    Catalog,
}

/// A recipe with its ingredient list and display metadata
///
/// Immutable for the duration of a matching pass. A payload with a
/// missing ingredients field deserializes to an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "readyInMinutes", default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    pub source: RecipeSource,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(rename = "extendedIngredients", default)]
    pub extended_ingredients: Vec<String>,
}

/// A recipe annotated with its pantry overlap
///
/// Derived per request and discarded after the response is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeMatch {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(rename = "usedIngredients")]
    pub used_ingredients: Vec<Ingredient>,
    #[serde(rename = "missedIngredients")]
    pub missed_ingredients: Vec<Ingredient>,
    #[serde(rename = "usedIngredientCount")]
    pub used_ingredient_count: usize,
    #[serde(rename = "missedIngredientCount")]
    pub missed_ingredient_count: usize,
}

/// A recipe the user bookmarked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub id: i32,
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "recipeApiId")]
    pub recipe_api_id: String,
    pub title: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "savedAt")]
    pub saved_at: chrono::DateTime<chrono::Utc>,
}
