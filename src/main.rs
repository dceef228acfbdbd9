mod auth;
mod catalog;
mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use auth::AuthKeys;
use crate::config::Settings;
use routes::AppState;
use services::{MealDbClient, PantryStore, SpoonacularClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting PantryPal API...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Shared HTTP client for recipe providers, with a bounded timeout so a
    // slow provider cannot stall the suggestion pipeline
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.providers.timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            panic!("HTTP client error: {}", e);
        });

    let spoonacular = settings
        .providers
        .spoonacular
        .api_key
        .as_ref()
        .filter(|key| !key.is_empty())
        .map(|key| {
            Arc::new(SpoonacularClient::new(
                settings.providers.spoonacular.base_url.clone(),
                key.clone(),
                http_client.clone(),
            ))
        });

    match &spoonacular {
        Some(_) => info!("Spoonacular client initialized"),
        None => info!("No Spoonacular API key configured, running with MealDB and catalog only"),
    }

    let mealdb = Arc::new(MealDbClient::new(
        settings.providers.mealdb.base_url.clone(),
        http_client,
    ));

    info!("MealDB client initialized");

    // Initialize PostgreSQL store (runs migrations)
    let store = Arc::new(
        PantryStore::from_settings(
            &settings.database.url,
            settings.database.max_connections,
            settings.database.min_connections,
        )
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to connect to PostgreSQL: {}", e);
            panic!("PostgreSQL connection error: {}", e);
        }),
    );

    info!("PostgreSQL store initialized");

    let auth_keys = AuthKeys::new(&settings.auth.jwt_secret, settings.auth.token_ttl_days);

    // Build application state
    let app_state = AppState {
        store,
        spoonacular,
        mealdb,
        limits: settings.suggestions,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(auth_keys.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
