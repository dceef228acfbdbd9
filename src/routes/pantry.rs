use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::auth::AuthedUser;
use crate::models::{ErrorResponse, MessageResponse, NewPantryItemRequest, UpdatePantryItemRequest};
use crate::routes::AppState;

/// Items expiring within this window show up on /pantry/expiring
const EXPIRY_WINDOW_DAYS: i32 = 3;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pantry")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/expiring", web::get().to(expiring_items))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}

/// All pantry items for the caller, soonest expiry first
///
/// GET /api/pantry
async fn list_items(state: web::Data<AppState>, user: AuthedUser) -> impl Responder {
    match state.store.list_items(user.id).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            tracing::error!("Failed to list pantry items for {}: {}", user.id, e);
            server_error()
        }
    }
}

/// Items expiring within the next few days
///
/// GET /api/pantry/expiring
async fn expiring_items(state: web::Data<AppState>, user: AuthedUser) -> impl Responder {
    match state.store.expiring_items(user.id, EXPIRY_WINDOW_DAYS).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            tracing::error!("Failed to list expiring items for {}: {}", user.id, e);
            server_error()
        }
    }
}

/// Add a pantry item
///
/// POST /api/pantry
async fn create_item(
    state: web::Data<AppState>,
    user: AuthedUser,
    req: web::Json<NewPantryItemRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.store.create_item(user.id, &req).await {
        Ok(item) => {
            tracing::debug!("User {} added pantry item '{}'", user.id, item.name);
            HttpResponse::Created().json(item)
        }
        Err(e) => {
            tracing::error!("Failed to create pantry item for {}: {}", user.id, e);
            server_error()
        }
    }
}

/// Update a pantry item; absent fields are left unchanged
///
/// PUT /api/pantry/{id}
async fn update_item(
    state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<i32>,
    req: web::Json<UpdatePantryItemRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match state.store.update_item(user.id, id, &req).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => item_not_found(),
        Err(e) => {
            tracing::error!("Failed to update pantry item {} for {}: {}", id, user.id, e);
            server_error()
        }
    }
}

/// Remove a pantry item
///
/// DELETE /api/pantry/{id}
async fn delete_item(
    state: web::Data<AppState>,
    user: AuthedUser,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();

    match state.store.delete_item(user.id, id).await {
        Ok(true) => HttpResponse::Ok().json(MessageResponse {
            message: "Item deleted successfully".to_string(),
        }),
        Ok(false) => item_not_found(),
        Err(e) => {
            tracing::error!("Failed to delete pantry item {} for {}: {}", id, user.id, e);
            server_error()
        }
    }
}

fn item_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Item not found".to_string(),
        message: "No such pantry item for this user".to_string(),
        status_code: 404,
    })
}

fn server_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Server error".to_string(),
        message: "Pantry operation failed".to_string(),
        status_code: 500,
    })
}
