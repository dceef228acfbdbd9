use actix_web::{web, HttpResponse, Responder};

use crate::models::ErrorResponse;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/categories", web::get().to(list_categories));
}

/// All categories, alphabetical
///
/// GET /api/categories
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_categories().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => {
            tracing::error!("Failed to list categories: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Server error".to_string(),
                message: "Failed to list categories".to_string(),
                status_code: 500,
            })
        }
    }
}
