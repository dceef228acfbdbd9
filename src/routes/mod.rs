// Route exports
pub mod auth;
pub mod categories;
pub mod pantry;
pub mod recipes;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::config::SuggestionSettings;
use crate::models::HealthResponse;
use crate::services::{MealDbClient, PantryStore, SpoonacularClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PantryStore>,
    pub spoonacular: Option<Arc<SpoonacularClient>>,
    pub mealdb: Arc<MealDbClient>,
    pub limits: SuggestionSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health_check))
            .configure(auth::configure)
            .configure(pantry::configure)
            .configure(categories::configure)
            .configure(recipes::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
