use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use validator::Validate;

use crate::auth::AuthedUser;
use crate::catalog;
use crate::core::{match_recipes, merge_sources, rank_matches};
use crate::models::{
    ErrorResponse, MessageResponse, Recipe, RecipeSource, SaveRecipeRequest, SearchResponse,
    SuggestionsResponse,
};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/recipes")
            .route("/suggestions", web::get().to(suggestions))
            .route("/search/{ingredient}", web::get().to(search))
            .route("/random/inspiration", web::get().to(random_inspiration))
            .route("/save", web::post().to(save_recipe))
            .route("/saved/all", web::get().to(saved_recipes))
            .route("/saved/{id}", web::delete().to(delete_saved))
            .route("/{id}", web::get().to(recipe_detail)),
    );
}

/// Recipe suggestions ranked by pantry overlap
///
/// GET /api/recipes/suggestions
///
/// Provider calls fan out concurrently and are joined before merging;
/// a failed provider contributes nothing rather than failing the request.
async fn suggestions(state: web::Data<AppState>, user: AuthedUser) -> impl Responder {
    let pantry_names = match state.store.pantry_names(user.id).await {
        Ok(names) => names,
        Err(e) => {
            tracing::error!("Failed to load pantry for {}: {}", user.id, e);
            return server_error("Failed to fetch recipe suggestions");
        }
    };

    if pantry_names.is_empty() {
        return HttpResponse::Ok().json(empty_pantry_suggestions(state.limits.fallback_count));
    }

    tracing::debug!(
        "Fetching suggestions for user {} ({} pantry items)",
        user.id,
        pantry_names.len()
    );

    let spoonacular_results = async {
        match &state.spoonacular {
            Some(client) => match client
                .find_by_ingredients(&pantry_names, state.limits.max_results)
                .await
            {
                Ok(recipes) => recipes,
                Err(e) => {
                    tracing::warn!("Spoonacular unavailable, continuing without it: {}", e);
                    vec![]
                }
            },
            None => vec![],
        }
    };

    let mealdb_results = async {
        let mut recipes: Vec<Recipe> = Vec::new();
        for name in pantry_names.iter().take(state.limits.search_ingredient_limit) {
            match state
                .mealdb
                .filter_by_ingredient(name, state.limits.per_ingredient_limit)
                .await
            {
                Ok(found) => recipes.extend(found),
                Err(e) => {
                    tracing::warn!("MealDB lookup for '{}' failed: {}", name, e);
                }
            }
        }
        recipes
    };

    let (spoonacular, mealdb) = tokio::join!(spoonacular_results, mealdb_results);

    let sources = vec![
        match_recipes(spoonacular, &pantry_names),
        match_recipes(mealdb, &pantry_names),
        match_recipes(catalog::fallback_recipes(), &pantry_names),
    ];

    let mut ranked = rank_matches(merge_sources(sources));
    ranked.truncate(state.limits.max_results);

    let message = format!(
        "Found {} recipes based on your {} pantry items!",
        ranked.len(),
        pantry_names.len()
    );

    tracing::info!(
        "Returning {} suggestions for user {}",
        ranked.len(),
        user.id
    );

    HttpResponse::Ok().json(SuggestionsResponse {
        recipes: ranked,
        message: Some(message),
    })
}

/// The response served when the caller has no pantry items yet
///
/// Nothing to match against, so the default catalog slice is served as-is
/// (all counts zero, catalog order) with a message explaining why.
pub fn empty_pantry_suggestions(fallback_count: usize) -> SuggestionsResponse {
    SuggestionsResponse {
        recipes: match_recipes(catalog::fallback_slice(fallback_count), &[]),
        message: Some(
            "Add items to your pantry to get personalized recipe suggestions! \
             Here are some popular recipes:"
                .to_string(),
        ),
    }
}

/// Search recipes by a single ingredient
///
/// GET /api/recipes/search/{ingredient}
async fn search(
    state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<String>,
) -> impl Responder {
    let ingredient = path.into_inner();
    let term = ingredient.to_lowercase();

    let mealdb = match state
        .mealdb
        .filter_by_ingredient(&ingredient, state.limits.per_ingredient_limit)
        .await
    {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::warn!("MealDB search for '{}' failed: {}", ingredient, e);
            vec![]
        }
    };

    let from_catalog: Vec<Recipe> = catalog::fallback_recipes()
        .into_iter()
        .filter(|recipe| {
            recipe.title.to_lowercase().contains(&term)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ing| ing.name.to_lowercase().contains(&term))
        })
        .collect();

    // Annotate results against the caller's pantry; search order is kept
    let pantry_names = state.store.pantry_names(user.id).await.unwrap_or_default();

    let mut recipes = merge_sources(vec![
        match_recipes(mealdb, &pantry_names),
        match_recipes(from_catalog, &pantry_names),
    ]);
    recipes.truncate(state.limits.max_results);

    HttpResponse::Ok().json(SearchResponse { recipes })
}

#[derive(Debug, Deserialize)]
struct DetailQuery {
    source: Option<RecipeSource>,
}

/// Recipe details, dispatched on the explicit source tag
///
/// GET /api/recipes/{id}?source=catalog|mealdb|spoonacular
///
/// Without a source the catalog is tried first, then MealDB, then
/// Spoonacular. When nothing resolves a generic placeholder is returned
/// instead of an error.
async fn recipe_detail(
    state: web::Data<AppState>,
    _user: AuthedUser,
    path: web::Path<String>,
    query: web::Query<DetailQuery>,
) -> impl Responder {
    let id = path.into_inner();

    let recipe = match query.source {
        Some(RecipeSource::Catalog) => catalog::find_by_id(&id),
        Some(RecipeSource::MealDb) => lookup_mealdb(state.get_ref(), &id).await,
        Some(RecipeSource::Spoonacular) => lookup_spoonacular(state.get_ref(), &id).await,
        None => {
            let mut found = catalog::find_by_id(&id);
            if found.is_none() {
                found = lookup_mealdb(state.get_ref(), &id).await;
            }
            if found.is_none() {
                found = lookup_spoonacular(state.get_ref(), &id).await;
            }
            found
        }
    };

    match recipe {
        Some(recipe) => HttpResponse::Ok().json(recipe),
        None => HttpResponse::Ok().json(placeholder_recipe(&id)),
    }
}

async fn lookup_mealdb(state: &AppState, id: &str) -> Option<Recipe> {
    match state.mealdb.lookup(id).await {
        Ok(recipe) => recipe,
        Err(e) => {
            tracing::warn!("MealDB lookup for {} failed: {}", id, e);
            None
        }
    }
}

async fn lookup_spoonacular(state: &AppState, id: &str) -> Option<Recipe> {
    let client = state.spoonacular.as_ref()?;
    match client.recipe_information(id).await {
        Ok(recipe) => Some(recipe),
        Err(e) => {
            tracing::warn!("Spoonacular lookup for {} failed: {}", id, e);
            None
        }
    }
}

/// Shown when a recipe id resolves nowhere
fn placeholder_recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: "Recipe Details".to_string(),
        image: Some(
            "https://www.themealdb.com/images/media/meals/qtqwwu1511792650.jpg".to_string(),
        ),
        ready_in_minutes: Some(30),
        servings: Some(4),
        source: RecipeSource::Catalog,
        ingredients: vec![],
        instructions: Some(
            "Recipe instructions will appear here. Add more items to your pantry \
             for personalized recipes!"
                .to_string(),
        ),
        extended_ingredients: vec!["Various ingredients as needed".to_string()],
    }
}

/// A random recipe for the dashboard
///
/// GET /api/recipes/random/inspiration
async fn random_inspiration(state: web::Data<AppState>, _user: AuthedUser) -> impl Responder {
    match state.mealdb.random().await {
        Ok(Some(recipe)) => HttpResponse::Ok().json(recipe),
        Ok(None) => HttpResponse::Ok().json(catalog_pick()),
        Err(e) => {
            tracing::warn!("MealDB random failed, serving catalog entry: {}", e);
            HttpResponse::Ok().json(catalog_pick())
        }
    }
}

fn catalog_pick() -> Recipe {
    let recipes = catalog::fallback_recipes();
    let index = (chrono::Utc::now().timestamp_millis() as usize) % recipes.len();
    recipes.into_iter().nth(index).unwrap_or_else(|| placeholder_recipe("0"))
}

/// Bookmark a recipe
///
/// POST /api/recipes/save
async fn save_recipe(
    state: web::Data<AppState>,
    user: AuthedUser,
    req: web::Json<SaveRecipeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.store.save_recipe(user.id, &req).await {
        Ok(Some(saved)) => HttpResponse::Created().json(saved),
        Ok(None) => HttpResponse::Ok().json(MessageResponse {
            message: "Recipe already saved".to_string(),
        }),
        Err(e) => {
            tracing::error!("Failed to save recipe for {}: {}", user.id, e);
            server_error("Failed to save recipe")
        }
    }
}

/// All bookmarked recipes, newest first
///
/// GET /api/recipes/saved/all
async fn saved_recipes(state: web::Data<AppState>, user: AuthedUser) -> impl Responder {
    match state.store.saved_recipes(user.id).await {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(e) => {
            tracing::error!("Failed to list saved recipes for {}: {}", user.id, e);
            server_error("Failed to list saved recipes")
        }
    }
}

/// Remove a bookmark
///
/// DELETE /api/recipes/saved/{id}
async fn delete_saved(
    state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();

    match state.store.delete_saved(user.id, id).await {
        Ok(true) => HttpResponse::Ok().json(MessageResponse {
            message: "Recipe removed from saved".to_string(),
        }),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: "No such saved recipe for this user".to_string(),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to delete saved recipe {} for {}: {}", id, user.id, e);
            server_error("Failed to delete saved recipe")
        }
    }
}

fn server_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Server error".to_string(),
        message: message.to_string(),
        status_code: 500,
    })
}
