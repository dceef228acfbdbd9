// Integration tests for the PantryPal API

use pantrypal_api::auth::{hash_password, verify_password, AuthKeys};
use pantrypal_api::catalog;
use pantrypal_api::core::{match_recipes, merge_sources, rank_matches};
use pantrypal_api::models::RecipeSource;
use pantrypal_api::services::{MealDbClient, SpoonacularClient};
use reqwest::Client;

fn pantry(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_integration_suggestion_pipeline_over_catalog() {
    let pantry_names = pantry(&["chicken", "garlic", "rice", "soy sauce", "onion"]);

    // Both providers down: only the catalog contributes.
    let sources = vec![
        vec![],
        vec![],
        match_recipes(catalog::fallback_recipes(), &pantry_names),
    ];

    let mut ranked = rank_matches(merge_sources(sources));
    ranked.truncate(12);

    assert!(!ranked.is_empty());
    assert!(ranked.len() <= 12);

    // Descending by used count, and every entry is catalog-sourced.
    for window in ranked.windows(2) {
        assert!(window[0].used_ingredient_count >= window[1].used_ingredient_count);
    }
    for m in &ranked {
        assert_eq!(m.recipe.source, RecipeSource::Catalog);
    }

    // Teriyaki Chicken Bowl uses chicken, rice, soy sauce and garlic,
    // the best overlap in the catalog for this pantry.
    assert_eq!(ranked[0].recipe.id, "115");
    assert_eq!(ranked[0].used_ingredient_count, 4);
}

#[test]
fn test_integration_empty_pantry_fallback() {
    let ranked = rank_matches(match_recipes(catalog::fallback_slice(8), &[]));

    assert_eq!(ranked.len(), 8);
    let ids: Vec<&str> = ranked.iter().map(|m| m.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["101", "102", "103", "104", "105", "106", "107", "108"]);
    assert!(ranked.iter().all(|m| m.used_ingredient_count == 0));
}

#[tokio::test]
async fn test_mealdb_filter_parses_results() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/filter.php?i=chicken")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meals":[
                {"idMeal":"52940","strMeal":"Brown Stew Chicken","strMealThumb":"https://example.com/1.jpg"},
                {"idMeal":"52846","strMeal":"Chicken Basquaise","strMealThumb":"https://example.com/2.jpg"},
                {"idMeal":"53085","strMeal":"Chicken Ramen","strMealThumb":"https://example.com/3.jpg"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = MealDbClient::new(server.url(), Client::new());
    let recipes = client.filter_by_ingredient("chicken", 2).await.unwrap();

    mock.assert_async().await;

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id, "52940");
    assert_eq!(recipes[0].title, "Brown Stew Chicken");
    assert_eq!(recipes[0].source, RecipeSource::MealDb);
    assert_eq!(recipes[0].ingredients.len(), 1);
    assert_eq!(recipes[0].ingredients[0].name, "chicken");
}

#[tokio::test]
async fn test_mealdb_filter_null_meals_is_empty() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/filter.php?i=unobtainium")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals":null}"#)
        .create_async()
        .await;

    let client = MealDbClient::new(server.url(), Client::new());
    let recipes = client.filter_by_ingredient("unobtainium", 6).await.unwrap();

    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_mealdb_server_error_is_err() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/filter.php?i=chicken")
        .with_status(500)
        .create_async()
        .await;

    let client = MealDbClient::new(server.url(), Client::new());
    let result = client.filter_by_ingredient("chicken", 6).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_mealdb_lookup_folds_ingredient_columns() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/lookup.php?i=52772")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meals":[{
                "idMeal":"52772",
                "strMeal":"Teriyaki Chicken Casserole",
                "strMealThumb":"https://example.com/teriyaki.jpg",
                "strInstructions":"Preheat oven to 350.",
                "strIngredient1":"soy sauce","strMeasure1":"3/4 cup",
                "strIngredient2":"water","strMeasure2":"1/2 cup",
                "strIngredient3":"chicken","strMeasure3":"2 breasts",
                "strIngredient4":"","strMeasure4":"",
                "strIngredient5":null,"strMeasure5":null
            }]}"#,
        )
        .create_async()
        .await;

    let client = MealDbClient::new(server.url(), Client::new());
    let recipe = client.lookup("52772").await.unwrap().unwrap();

    assert_eq!(recipe.id, "52772");
    assert_eq!(recipe.title, "Teriyaki Chicken Casserole");
    assert_eq!(recipe.source, RecipeSource::MealDb);
    let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["soy sauce", "water", "chicken"]);
    assert_eq!(recipe.extended_ingredients.len(), 3);
    assert!(recipe.extended_ingredients[0].contains("soy sauce"));
    assert_eq!(recipe.instructions.as_deref(), Some("Preheat oven to 350."));
}

#[tokio::test]
async fn test_spoonacular_find_by_ingredients_normalizes_payload() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock(
            "GET",
            "/recipes/findByIngredients?ingredients=chicken%2Crice&number=12&ranking=2&ignorePantry=false&apiKey=test_key",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": 641803,
                "title": "Easy Chicken Fried Rice",
                "image": "https://example.com/fried-rice.jpg",
                "usedIngredients": [{"name":"chicken"},{"name":"rice"}],
                "missedIngredients": [{"name":"peas"},{"name":"sesame oil"}]
            }]"#,
        )
        .create_async()
        .await;

    let client = SpoonacularClient::new(server.url(), "test_key".to_string(), Client::new());
    let recipes = client
        .find_by_ingredients(&pantry(&["chicken", "rice"]), 12)
        .await
        .unwrap();

    mock.assert_async().await;

    assert_eq!(recipes.len(), 1);
    let recipe = &recipes[0];
    assert_eq!(recipe.id, "641803");
    assert_eq!(recipe.source, RecipeSource::Spoonacular);
    let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["chicken", "rice", "peas", "sesame oil"]);

    // Re-classification by our matcher must agree with the provider's split.
    let matched = match_recipes(recipes, &pantry(&["chicken", "rice"]));
    assert_eq!(matched[0].used_ingredient_count, 2);
    assert_eq!(matched[0].missed_ingredient_count, 2);
}

#[tokio::test]
async fn test_spoonacular_error_status_is_err() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock(
            "GET",
            "/recipes/findByIngredients?ingredients=chicken&number=12&ranking=2&ignorePantry=false&apiKey=bad_key",
        )
        .with_status(402)
        .with_body(r#"{"status":"failure","code":402}"#)
        .create_async()
        .await;

    let client = SpoonacularClient::new(server.url(), "bad_key".to_string(), Client::new());
    let result = client.find_by_ingredients(&pantry(&["chicken"]), 12).await;

    assert!(result.is_err());
}

#[test]
fn test_jwt_round_trip_and_tamper_rejection() {
    let keys = AuthKeys::new("integration-test-secret", 7);

    let token = keys.issue_token(42, "cook@example.com").unwrap();
    let claims = keys.verify_token(&token).unwrap();
    assert_eq!(claims.sub, 42);
    assert_eq!(claims.email, "cook@example.com");

    let mut tampered = token.clone();
    tampered.push('x');
    assert!(keys.verify_token(&tampered).is_err());

    let other_keys = AuthKeys::new("some-other-secret", 7);
    assert!(other_keys.verify_token(&token).is_err());
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("hunter2-but-longer").unwrap();
    assert_ne!(hash, "hunter2-but-longer");
    assert!(verify_password("hunter2-but-longer", &hash).unwrap());
    assert!(!verify_password("wrong-password", &hash).unwrap());
}
