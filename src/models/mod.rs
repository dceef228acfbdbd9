// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{User, Category, PantryItem, Ingredient, Recipe, RecipeMatch, RecipeSource, SavedRecipe};
pub use requests::{RegisterRequest, LoginRequest, NewPantryItemRequest, UpdatePantryItemRequest, SaveRecipeRequest};
pub use responses::{SuggestionsResponse, SearchResponse, AuthResponse, HealthResponse, ErrorResponse, MessageResponse};
