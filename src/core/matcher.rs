use crate::models::{Ingredient, Recipe, RecipeMatch};

/// Partition a recipe's ingredients into used vs missed against the pantry
///
/// An ingredient counts as "used" when any pantry name is a substring of
/// the ingredient name or the ingredient name is a substring of any pantry
/// name, after lowercasing both sides. Deliberately a plain substring test:
/// pantry "tomato" matches "tomatoes" and "cherry tomato", and false
/// positives like "egg" vs "eggplant" are accepted in exchange for recall.
pub fn match_recipes(recipes: Vec<Recipe>, pantry_names: &[String]) -> Vec<RecipeMatch> {
    // Normalize the pantry once; ingredients are normalized per test
    let pantry_lower: Vec<String> = pantry_names.iter().map(|n| n.to_lowercase()).collect();

    recipes
        .into_iter()
        .map(|recipe| classify_recipe(recipe, &pantry_lower))
        .collect()
}

/// Classify a single recipe against an already-lowercased pantry
pub fn classify_recipe(recipe: Recipe, pantry_lower: &[String]) -> RecipeMatch {
    let mut used_ingredients: Vec<Ingredient> = Vec::new();
    let mut missed_ingredients: Vec<Ingredient> = Vec::new();

    for ingredient in &recipe.ingredients {
        if is_in_pantry(&ingredient.name, pantry_lower) {
            used_ingredients.push(ingredient.clone());
        } else {
            missed_ingredients.push(ingredient.clone());
        }
    }

    let used_ingredient_count = used_ingredients.len();
    let missed_ingredient_count = missed_ingredients.len();

    RecipeMatch {
        recipe,
        used_ingredients,
        missed_ingredients,
        used_ingredient_count,
        missed_ingredient_count,
    }
}

/// Bidirectional case-insensitive containment test
#[inline]
pub fn is_in_pantry(ingredient_name: &str, pantry_lower: &[String]) -> bool {
    let ing = ingredient_name.to_lowercase();
    pantry_lower
        .iter()
        .any(|pantry| pantry.contains(&ing) || ing.contains(pantry.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeSource;

    fn create_recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            image: None,
            ready_in_minutes: Some(30),
            servings: Some(4),
            source: RecipeSource::Catalog,
            ingredients: ingredients.iter().map(|n| Ingredient::new(*n)).collect(),
            instructions: None,
            extended_ingredients: vec![],
        }
    }

    fn pantry(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_concrete_creamy_garlic_pasta() {
        let recipe = create_recipe(
            "101",
            &["pasta", "garlic", "butter", "cream", "parmesan", "parsley"],
        );
        let results = match_recipes(vec![recipe], &pantry(&["garlic", "pasta", "butter", "cream"]));

        assert_eq!(results.len(), 1);
        let m = &results[0];
        assert_eq!(m.used_ingredient_count, 4);
        assert_eq!(m.missed_ingredient_count, 2);
        let used: Vec<&str> = m.used_ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(used, vec!["pasta", "garlic", "butter", "cream"]);
        let missed: Vec<&str> = m.missed_ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(missed, vec!["parmesan", "parsley"]);
    }

    #[test]
    fn test_bidirectional_substring() {
        // Pantry "tomato" matches ingredient "tomatoes" (pantry ⊂ ingredient)
        let results = match_recipes(vec![create_recipe("1", &["tomatoes"])], &pantry(&["tomato"]));
        assert_eq!(results[0].used_ingredient_count, 1);

        // Pantry "cherry tomatoes" matches ingredient "tomato" (ingredient ⊂ pantry)
        let results = match_recipes(
            vec![create_recipe("1", &["tomato"])],
            &pantry(&["cherry tomatoes"]),
        );
        assert_eq!(results[0].used_ingredient_count, 1);
    }

    #[test]
    fn test_case_insensitive() {
        let results = match_recipes(vec![create_recipe("1", &["Soy Sauce"])], &pantry(&["SOY sauce"]));
        assert_eq!(results[0].used_ingredient_count, 1);
    }

    #[test]
    fn test_accepts_known_false_positive() {
        // "egg" is a substring of "eggplant"; the heuristic favors recall
        let results = match_recipes(vec![create_recipe("1", &["eggplant"])], &pantry(&["egg"]));
        assert_eq!(results[0].used_ingredient_count, 1);
    }

    #[test]
    fn test_empty_ingredient_list() {
        let results = match_recipes(vec![create_recipe("1", &[])], &pantry(&["garlic"]));
        assert_eq!(results[0].used_ingredient_count, 0);
        assert_eq!(results[0].missed_ingredient_count, 0);
        assert!(results[0].used_ingredients.is_empty());
        assert!(results[0].missed_ingredients.is_empty());
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let recipe = create_recipe("1", &["chicken", "rice", "soy sauce", "ginger", "honey"]);
        let original = recipe.ingredients.clone();
        let results = match_recipes(vec![recipe], &pantry(&["rice", "honey"]));
        let m = &results[0];

        let mut combined = m.used_ingredients.clone();
        combined.extend(m.missed_ingredients.clone());
        combined.sort_by(|a, b| a.name.cmp(&b.name));
        let mut expected = original;
        expected.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(combined, expected);

        for ing in &m.used_ingredients {
            assert!(!m.missed_ingredients.contains(ing));
        }
    }

    #[test]
    fn test_monotonicity_of_pantry_growth() {
        let recipe = create_recipe("1", &["flour", "eggs", "milk", "butter"]);
        let before = match_recipes(vec![recipe.clone()], &pantry(&["flour"]));
        let after = match_recipes(vec![recipe], &pantry(&["flour", "milk"]));

        assert!(after[0].used_ingredient_count >= before[0].used_ingredient_count);
        for ing in &before[0].used_ingredients {
            assert!(after[0].used_ingredients.contains(ing));
        }
    }
}
