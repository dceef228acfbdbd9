use reqwest::Client;
use serde_json::Value;

use super::ProviderError;
use crate::models::{Ingredient, Recipe, RecipeSource};

/// TheMealDB API client
///
/// Secondary recipe provider. Free tier, no API key. The filter endpoint
/// only returns id/title/thumbnail, so a filtered recipe carries the
/// searched ingredient as its single known ingredient; full lists come
/// from the lookup endpoint.
pub struct MealDbClient {
    base_url: String,
    client: Client,
}

impl MealDbClient {
    pub fn new(base_url: String, client: Client) -> Self {
        Self { base_url, client }
    }

    /// List recipes containing the given ingredient
    pub async fn filter_by_ingredient(
        &self,
        ingredient: &str,
        limit: usize,
    ) -> Result<Vec<Recipe>, ProviderError> {
        let url = format!(
            "{}/filter.php?i={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(ingredient),
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "filter failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        // "meals": null means no results, not an error
        let meals = match json.get("meals").and_then(|m| m.as_array()) {
            Some(meals) => meals,
            None => return Ok(vec![]),
        };

        let recipes: Vec<Recipe> = meals
            .iter()
            .take(limit)
            .filter_map(|meal| {
                let id = meal.get("idMeal")?.as_str()?.to_string();
                let title = meal.get("strMeal")?.as_str()?.to_string();
                Some(Recipe {
                    id,
                    title,
                    image: meal.get("strMealThumb").and_then(|v| v.as_str()).map(String::from),
                    ready_in_minutes: Some(30),
                    servings: Some(4),
                    source: RecipeSource::MealDb,
                    ingredients: vec![Ingredient::new(ingredient)],
                    instructions: None,
                    extended_ingredients: vec![],
                })
            })
            .collect();

        tracing::debug!("MealDB returned {} recipes for '{}'", recipes.len(), ingredient);

        Ok(recipes)
    }

    /// Fetch full details for a single recipe by id
    pub async fn lookup(&self, id: &str) -> Result<Option<Recipe>, ProviderError> {
        let url = format!(
            "{}/lookup.php?i={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(id),
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "lookup failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let meal = match json
            .get("meals")
            .and_then(|m| m.as_array())
            .and_then(|meals| meals.first())
        {
            Some(meal) => meal,
            None => return Ok(None),
        };

        Ok(parse_meal(meal))
    }

    /// Fetch a random recipe for the inspiration endpoint
    pub async fn random(&self) -> Result<Option<Recipe>, ProviderError> {
        let url = format!("{}/random.php", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "random failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let meal = match json
            .get("meals")
            .and_then(|m| m.as_array())
            .and_then(|meals| meals.first())
        {
            Some(meal) => meal,
            None => return Ok(None),
        };

        Ok(parse_meal(meal))
    }
}

/// Fold MealDB's strIngredient1..20 / strMeasure1..20 columns into lists
fn parse_meal(meal: &Value) -> Option<Recipe> {
    let id = meal.get("idMeal")?.as_str()?.to_string();
    let title = meal.get("strMeal")?.as_str()?.to_string();

    let mut ingredients: Vec<Ingredient> = Vec::new();
    let mut extended_ingredients: Vec<String> = Vec::new();

    for i in 1..=20 {
        let ingredient = meal
            .get(format!("strIngredient{}", i))
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim();
        if ingredient.is_empty() {
            continue;
        }

        let measure = meal
            .get(format!("strMeasure{}", i))
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim();

        ingredients.push(Ingredient::new(ingredient));
        extended_ingredients.push(format!("{} {}", measure, ingredient).trim().to_string());
    }

    Some(Recipe {
        id,
        title,
        image: meal.get("strMealThumb").and_then(|v| v.as_str()).map(String::from),
        ready_in_minutes: Some(30),
        servings: Some(4),
        source: RecipeSource::MealDb,
        ingredients,
        instructions: meal.get("strInstructions").and_then(|v| v.as_str()).map(String::from),
        extended_ingredients,
    })
}
