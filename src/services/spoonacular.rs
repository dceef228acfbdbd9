use reqwest::Client;
use serde_json::Value;

use super::ProviderError;
use crate::models::{Ingredient, Recipe, RecipeSource};

/// Spoonacular API client
///
/// Primary external recipe provider. Only constructed when an API key is
/// configured; the suggestion pipeline runs without it otherwise.
pub struct SpoonacularClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl SpoonacularClient {
    pub fn new(base_url: String, api_key: String, client: Client) -> Self {
        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Find recipes matching a set of pantry ingredient names
    ///
    /// Results are normalized into the common `Recipe` shape; the provider's
    /// own used/missed classification is folded back into a plain ingredient
    /// list so the shared matcher can re-classify against the pantry.
    pub async fn find_by_ingredients(
        &self,
        pantry_names: &[String],
        number: usize,
    ) -> Result<Vec<Recipe>, ProviderError> {
        let ingredients = pantry_names.join(",");
        let url = format!(
            "{}/recipes/findByIngredients?ingredients={}&number={}&ranking=2&ignorePantry=false&apiKey={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&ingredients),
            number,
            self.api_key,
        );

        tracing::debug!("Querying Spoonacular for {} pantry ingredients", pantry_names.len());

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "findByIngredients failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let entries = json
            .as_array()
            .ok_or_else(|| ProviderError::InvalidResponse("Expected a JSON array".into()))?;

        let recipes: Vec<Recipe> = entries.iter().filter_map(parse_find_result).collect();

        tracing::debug!("Spoonacular returned {} recipes", recipes.len());

        Ok(recipes)
    }

    /// Fetch full details for a single recipe
    pub async fn recipe_information(&self, id: &str) -> Result<Recipe, ProviderError> {
        let url = format!(
            "{}/recipes/{}/information?apiKey={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(id),
            self.api_key,
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::ApiError(format!(
                "recipe information failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        parse_information(&json)
            .ok_or_else(|| ProviderError::InvalidResponse("Missing recipe fields".into()))
    }
}

/// Normalize one findByIngredients entry; entries without id/title are dropped
fn parse_find_result(entry: &Value) -> Option<Recipe> {
    let id = value_to_id(entry.get("id")?)?;
    let title = entry.get("title")?.as_str()?.to_string();

    let mut ingredients: Vec<Ingredient> = Vec::new();
    for key in ["usedIngredients", "missedIngredients"] {
        if let Some(list) = entry.get(key).and_then(|v| v.as_array()) {
            for ing in list {
                if let Some(name) = ing.get("name").and_then(|n| n.as_str()) {
                    ingredients.push(Ingredient::new(name));
                }
            }
        }
    }

    Some(Recipe {
        id,
        title,
        image: entry.get("image").and_then(|v| v.as_str()).map(String::from),
        ready_in_minutes: entry.get("readyInMinutes").and_then(|v| v.as_u64()).map(|v| v as u32),
        servings: entry.get("servings").and_then(|v| v.as_u64()).map(|v| v as u32),
        source: RecipeSource::Spoonacular,
        ingredients,
        instructions: None,
        extended_ingredients: vec![],
    })
}

fn parse_information(json: &Value) -> Option<Recipe> {
    let id = value_to_id(json.get("id")?)?;
    let title = json.get("title")?.as_str()?.to_string();

    let mut ingredients: Vec<Ingredient> = Vec::new();
    let mut extended_ingredients: Vec<String> = Vec::new();
    if let Some(list) = json.get("extendedIngredients").and_then(|v| v.as_array()) {
        for ing in list {
            if let Some(name) = ing.get("name").and_then(|n| n.as_str()) {
                ingredients.push(Ingredient::new(name));
            }
            if let Some(original) = ing.get("original").and_then(|o| o.as_str()) {
                extended_ingredients.push(original.to_string());
            }
        }
    }

    Some(Recipe {
        id,
        title,
        image: json.get("image").and_then(|v| v.as_str()).map(String::from),
        ready_in_minutes: json.get("readyInMinutes").and_then(|v| v.as_u64()).map(|v| v as u32),
        servings: json.get("servings").and_then(|v| v.as_u64()).map(|v| v as u32),
        source: RecipeSource::Spoonacular,
        ingredients,
        instructions: json.get("instructions").and_then(|v| v.as_str()).map(String::from),
        extended_ingredients,
    })
}

/// Spoonacular ids are numeric on the wire; carry them as strings internally
fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
