//! PantryPal API - pantry management and recipe suggestion service
//!
//! The core is a small matching pipeline: pantry item names are matched
//! against recipe ingredient lists by bidirectional substring containment,
//! results from external recipe providers and a static catalog are merged
//! with first-occurrence de-duplication, and suggestions are ranked by
//! used-ingredient count.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{match_recipes, merge_sources, rank_matches};
pub use models::{Ingredient, PantryItem, Recipe, RecipeMatch, RecipeSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let results = match_recipes(catalog::fallback_slice(2), &["garlic".to_string()]);
        assert_eq!(results.len(), 2);
    }
}
