use std::collections::HashSet;

use crate::models::RecipeMatch;

/// Combine match lists from multiple sources, first occurrence wins
///
/// Sources must be passed in priority order (primary provider, secondary
/// provider, static catalog). A source that failed upstream contributes an
/// empty list and simply disappears from the result.
pub fn merge_sources(sources: Vec<Vec<RecipeMatch>>) -> Vec<RecipeMatch> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<RecipeMatch> = Vec::new();

    for source in sources {
        for result in source {
            if seen.insert(result.recipe.id.clone()) {
                merged.push(result);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Recipe, RecipeSource};

    fn create_match(id: &str, source: RecipeSource, used: usize) -> RecipeMatch {
        RecipeMatch {
            recipe: Recipe {
                id: id.to_string(),
                title: format!("Recipe {}", id),
                image: None,
                ready_in_minutes: None,
                servings: None,
                source,
                ingredients: vec![],
                instructions: None,
                extended_ingredients: vec![],
            },
            used_ingredients: vec![],
            missed_ingredients: vec![],
            used_ingredient_count: used,
            missed_ingredient_count: 0,
        }
    }

    #[test]
    fn test_dedupe_keeps_first_source() {
        let primary = vec![create_match("102", RecipeSource::Spoonacular, 3)];
        let fallback = vec![
            create_match("101", RecipeSource::Catalog, 1),
            create_match("102", RecipeSource::Catalog, 5),
        ];

        let merged = merge_sources(vec![primary, fallback]);

        assert_eq!(merged.len(), 2);
        let entry = merged.iter().find(|m| m.recipe.id == "102").unwrap();
        assert_eq!(entry.recipe.source, RecipeSource::Spoonacular);
        assert_eq!(entry.used_ingredient_count, 3);
    }

    #[test]
    fn test_failed_source_is_transparent() {
        let secondary = vec![create_match("200", RecipeSource::MealDb, 1)];
        let fallback = vec![create_match("101", RecipeSource::Catalog, 2)];

        let with_failure = merge_sources(vec![vec![], secondary.clone(), fallback.clone()]);
        let without = merge_sources(vec![secondary, fallback]);

        let ids_a: Vec<&str> = with_failure.iter().map(|m| m.recipe.id.as_str()).collect();
        let ids_b: Vec<&str> = without.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_concatenation_preserves_priority_order() {
        let merged = merge_sources(vec![
            vec![create_match("a", RecipeSource::Spoonacular, 0)],
            vec![create_match("b", RecipeSource::MealDb, 0)],
            vec![create_match("c", RecipeSource::Catalog, 0)],
        ]);
        let ids: Vec<&str> = merged.iter().map(|m| m.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_sources_yield_empty() {
        assert!(merge_sources(vec![vec![], vec![], vec![]]).is_empty());
    }
}
