//! Static fallback recipe catalog
//!
//! Served when both external providers are unavailable and as the lowest
//! priority suggestion source. Classification against the pantry is always
//! derived at request time; the catalog only stores ingredient lists.

use crate::models::{Ingredient, Recipe, RecipeSource};

fn recipe(
    id: &str,
    title: &str,
    image: &str,
    ready_in_minutes: u32,
    servings: u32,
    ingredients: &[&str],
    instructions: &str,
    extended: &[&str],
) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        image: Some(image.to_string()),
        ready_in_minutes: Some(ready_in_minutes),
        servings: Some(servings),
        source: RecipeSource::Catalog,
        ingredients: ingredients.iter().map(|n| Ingredient::new(*n)).collect(),
        instructions: Some(instructions.to_string()),
        extended_ingredients: extended.iter().map(|s| s.to_string()).collect(),
    }
}

/// The full fallback catalog, in fixed order
pub fn fallback_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "101",
            "Creamy Garlic Pasta",
            "https://www.themealdb.com/images/media/meals/qtqwwu1511792650.jpg",
            25,
            4,
            &["pasta", "garlic", "butter", "cream", "parmesan", "parsley"],
            "1. Cook pasta according to package directions.\n2. Mince garlic and sauté in butter until fragrant.\n3. Add cream and simmer for 5 minutes.\n4. Toss pasta with sauce and serve with parmesan.",
            &[
                "400g pasta",
                "4 cloves garlic, minced",
                "3 tbsp butter",
                "1 cup heavy cream",
                "1/2 cup parmesan cheese",
                "Fresh parsley for garnish",
            ],
        ),
        recipe(
            "102",
            "Classic Chicken Stir Fry",
            "https://www.themealdb.com/images/media/meals/1529446352.jpg",
            30,
            4,
            &["chicken", "broccoli", "carrots", "soy sauce", "garlic", "ginger", "sesame oil"],
            "1. Cut chicken into bite-sized pieces.\n2. Heat oil in wok over high heat.\n3. Cook chicken until golden, set aside.\n4. Stir fry vegetables for 3-4 minutes.\n5. Return chicken, add sauce, and toss.",
            &[
                "500g chicken breast",
                "2 cups broccoli florets",
                "2 carrots, sliced",
                "3 tbsp soy sauce",
                "3 cloves garlic",
                "1 tbsp fresh ginger",
                "1 tbsp sesame oil",
            ],
        ),
        recipe(
            "103",
            "Vegetable Fried Rice",
            "https://www.themealdb.com/images/media/meals/1529445434.jpg",
            20,
            4,
            &["rice", "eggs", "peas", "carrots", "soy sauce", "green onions"],
            "1. Use day-old cold rice for best results.\n2. Scramble eggs in wok, set aside.\n3. Stir fry vegetables until tender.\n4. Add rice and soy sauce, toss well.\n5. Mix in eggs and green onions.",
            &[
                "4 cups cooked rice (cold)",
                "3 eggs, beaten",
                "1 cup frozen peas",
                "2 carrots, diced",
                "3 tbsp soy sauce",
                "4 green onions, chopped",
            ],
        ),
        recipe(
            "104",
            "Fluffy Pancakes",
            "https://www.themealdb.com/images/media/meals/rwuyqx1511383174.jpg",
            20,
            4,
            &["flour", "eggs", "milk", "butter", "baking powder", "maple syrup"],
            "1. Mix flour, baking powder, and salt.\n2. Whisk eggs, milk, and melted butter.\n3. Combine wet and dry ingredients.\n4. Cook on griddle until bubbles form, flip.\n5. Serve with maple syrup.",
            &[
                "2 cups all-purpose flour",
                "2 eggs",
                "1.5 cups milk",
                "3 tbsp melted butter",
                "2 tsp baking powder",
                "Maple syrup for serving",
            ],
        ),
        recipe(
            "105",
            "Greek Salad",
            "https://www.themealdb.com/images/media/meals/k29viq1585565980.jpg",
            15,
            2,
            &["tomatoes", "cucumber", "onion", "olive oil", "feta cheese", "olives"],
            "1. Chop tomatoes, cucumber, and onion.\n2. Add olives and crumbled feta.\n3. Drizzle with olive oil and oregano.\n4. Season with salt and pepper.\n5. Toss gently and serve.",
            &[
                "3 ripe tomatoes, chopped",
                "1 cucumber, sliced",
                "1 red onion, sliced",
                "3 tbsp olive oil",
                "100g feta cheese",
                "1/2 cup kalamata olives",
            ],
        ),
        recipe(
            "106",
            "Beef Tacos",
            "https://www.themealdb.com/images/media/meals/ypxvwv1505333929.jpg",
            25,
            4,
            &["ground beef", "onion", "tomatoes", "garlic", "taco shells", "cheese", "lettuce"],
            "1. Brown ground beef with onion and garlic.\n2. Add taco seasoning and tomatoes.\n3. Simmer for 10 minutes.\n4. Warm taco shells in oven.\n5. Assemble with toppings.",
            &[
                "500g ground beef",
                "1 onion, diced",
                "2 tomatoes, diced",
                "3 cloves garlic",
                "8 taco shells",
                "1 cup shredded cheese",
                "2 cups shredded lettuce",
            ],
        ),
        recipe(
            "107",
            "Mushroom Risotto",
            "https://www.themealdb.com/images/media/meals/sywrsu1511463066.jpg",
            40,
            4,
            &["rice", "mushrooms", "onion", "butter", "white wine", "parmesan"],
            "1. Sauté mushrooms and set aside.\n2. Cook onion in butter until soft.\n3. Add rice and toast for 2 minutes.\n4. Add wine and stir until absorbed.\n5. Gradually add broth, stirring constantly.\n6. Finish with mushrooms and parmesan.",
            &[
                "1.5 cups arborio rice",
                "300g mixed mushrooms",
                "1 onion, finely diced",
                "4 tbsp butter",
                "1/2 cup white wine",
                "1/2 cup parmesan cheese",
            ],
        ),
        recipe(
            "108",
            "Honey Garlic Salmon",
            "https://www.themealdb.com/images/media/meals/1548772327.jpg",
            25,
            2,
            &["salmon", "garlic", "butter", "honey", "lemon"],
            "1. Mix honey, soy sauce, garlic, and lemon.\n2. Season salmon with salt and pepper.\n3. Sear salmon in butter until golden.\n4. Add sauce and baste.\n5. Cook until salmon is done.",
            &[
                "2 salmon fillets",
                "4 cloves garlic, minced",
                "2 tbsp butter",
                "3 tbsp honey",
                "1 lemon, juiced",
            ],
        ),
        recipe(
            "109",
            "Caprese Sandwich",
            "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
            10,
            2,
            &["bread", "tomatoes", "olive oil", "mozzarella", "basil"],
            "1. Slice bread and toast lightly.\n2. Layer fresh mozzarella slices.\n3. Add sliced tomatoes.\n4. Top with fresh basil leaves.\n5. Drizzle with olive oil and balsamic.",
            &[
                "4 slices crusty bread",
                "2 ripe tomatoes, sliced",
                "2 tbsp olive oil",
                "200g fresh mozzarella",
                "Fresh basil leaves",
            ],
        ),
        recipe(
            "110",
            "Banana Smoothie Bowl",
            "https://www.themealdb.com/images/media/meals/vwuprt1468331656.jpg",
            10,
            1,
            &["bananas", "milk", "honey", "granola", "berries"],
            "1. Freeze bananas overnight.\n2. Blend with milk until thick.\n3. Pour into bowl.\n4. Top with granola and berries.\n5. Drizzle with honey.",
            &[
                "2 frozen bananas",
                "1/2 cup milk",
                "1 tbsp honey",
                "1/4 cup granola",
                "1/2 cup mixed berries",
            ],
        ),
        recipe(
            "111",
            "Chicken Caesar Wrap",
            "https://www.themealdb.com/images/media/meals/llcbn01574260722.jpg",
            20,
            2,
            &["chicken", "lettuce", "garlic", "tortillas", "caesar dressing"],
            "1. Grill seasoned chicken breast.\n2. Slice chicken into strips.\n3. Chop romaine lettuce.\n4. Warm tortillas.\n5. Layer with dressing and wrap tightly.",
            &[
                "2 chicken breasts",
                "2 cups romaine lettuce",
                "2 cloves garlic",
                "2 large tortillas",
                "4 tbsp caesar dressing",
            ],
        ),
        recipe(
            "112",
            "Tomato Basil Soup",
            "https://www.themealdb.com/images/media/meals/stpuws1511191310.jpg",
            35,
            4,
            &["tomatoes", "onion", "garlic", "butter", "basil"],
            "1. Sauté onion and garlic in butter.\n2. Add canned tomatoes and broth.\n3. Simmer for 20 minutes.\n4. Blend until smooth.\n5. Stir in fresh basil and cream.",
            &[
                "2 cans crushed tomatoes",
                "1 onion, diced",
                "4 cloves garlic",
                "3 tbsp butter",
                "1/2 cup fresh basil",
            ],
        ),
        recipe(
            "113",
            "Spaghetti Carbonara",
            "https://www.themealdb.com/images/media/meals/llcbn01574260722.jpg",
            25,
            4,
            &["pasta", "eggs", "bacon", "garlic", "parmesan", "black pepper"],
            "1. Cook pasta until al dente.\n2. Fry bacon until crispy.\n3. Whisk eggs with parmesan.\n4. Toss hot pasta with bacon.\n5. Add egg mixture off heat, toss quickly.",
            &[
                "400g spaghetti",
                "4 eggs",
                "200g bacon or pancetta",
                "3 cloves garlic",
                "1 cup parmesan cheese",
                "Fresh black pepper",
            ],
        ),
        recipe(
            "114",
            "Grilled Cheese Deluxe",
            "https://www.themealdb.com/images/media/meals/xxyupu1468262513.jpg",
            15,
            2,
            &["bread", "cheese", "butter", "tomatoes"],
            "1. Butter outside of bread slices.\n2. Layer cheese between slices.\n3. Add tomato slices if desired.\n4. Grill on medium until golden.\n5. Flip and grill other side.",
            &[
                "4 slices bread",
                "4 slices cheddar cheese",
                "2 tbsp butter",
                "1 tomato, sliced (optional)",
            ],
        ),
        recipe(
            "115",
            "Teriyaki Chicken Bowl",
            "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            30,
            4,
            &["chicken", "rice", "soy sauce", "garlic", "ginger", "honey"],
            "1. Cook rice according to package.\n2. Slice chicken thighs.\n3. Make teriyaki sauce with soy, honey, garlic.\n4. Cook chicken and coat with sauce.\n5. Serve over rice with vegetables.",
            &[
                "500g chicken thighs",
                "2 cups rice",
                "4 tbsp soy sauce",
                "3 cloves garlic",
                "1 inch ginger",
                "3 tbsp honey",
            ],
        ),
        recipe(
            "116",
            "Avocado Toast",
            "https://www.themealdb.com/images/media/meals/rsqwus1511462879.jpg",
            10,
            2,
            &["bread", "eggs", "avocado", "lemon"],
            "1. Toast bread until golden.\n2. Mash avocado with lemon and salt.\n3. Spread on toast.\n4. Top with poached egg.\n5. Season with pepper and chili flakes.",
            &[
                "2 slices sourdough bread",
                "2 eggs",
                "1 ripe avocado",
                "1/2 lemon, juiced",
            ],
        ),
    ]
}

/// First `count` catalog entries, used for the empty-pantry default
pub fn fallback_slice(count: usize) -> Vec<Recipe> {
    let mut recipes = fallback_recipes();
    recipes.truncate(count);
    recipes
}

/// Look up a catalog recipe by id
pub fn find_by_id(id: &str) -> Option<Recipe> {
    fallback_recipes().into_iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_sixteen_unique_recipes() {
        let recipes = fallback_recipes();
        assert_eq!(recipes.len(), 16);

        let ids: HashSet<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn test_every_recipe_has_ingredients() {
        for recipe in fallback_recipes() {
            assert!(!recipe.ingredients.is_empty(), "{} has no ingredients", recipe.id);
            assert!(!recipe.extended_ingredients.is_empty());
            assert_eq!(recipe.source, crate::models::RecipeSource::Catalog);
        }
    }

    #[test]
    fn test_fallback_slice() {
        let slice = fallback_slice(8);
        assert_eq!(slice.len(), 8);
        assert_eq!(slice[0].id, "101");
        assert_eq!(slice[7].id, "108");
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_by_id("105").unwrap().title, "Greek Salad");
        assert!(find_by_id("999").is_none());
    }
}
