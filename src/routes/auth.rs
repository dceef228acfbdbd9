use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::auth::{hash_password, verify_password, AuthKeys, AuthedUser};
use crate::models::{AuthResponse, ErrorResponse, LoginRequest, RegisterRequest};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(me)),
    );
}

/// Register a new account
///
/// POST /api/auth/register
async fn register(
    state: web::Data<AppState>,
    keys: web::Data<AuthKeys>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.store.find_user_by_email(&req.email).await {
        Ok(Some(_)) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Email already registered".to_string(),
                message: "An account with this email already exists".to_string(),
                status_code: 400,
            });
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to check existing user: {}", e);
            return server_error("Failed to register");
        }
    }

    let password_hash = match hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return server_error("Failed to register");
        }
    };

    let user = match state
        .store
        .create_user(&req.email, &password_hash, &req.name)
        .await
    {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            return server_error("Failed to register");
        }
    };

    let token = match keys.issue_token(user.id, &user.email) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to issue token: {}", e);
            return server_error("Failed to register");
        }
    };

    tracing::info!("Registered new user: {}", user.id);

    HttpResponse::Created().json(AuthResponse { user, token })
}

/// Log in with email and password
///
/// POST /api/auth/login
async fn login(
    state: web::Data<AppState>,
    keys: web::Data<AuthKeys>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user = match state.store.find_user_by_email(&req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return invalid_credentials(),
        Err(e) => {
            tracing::error!("Failed to look up user: {}", e);
            return server_error("Failed to log in");
        }
    };

    match verify_password(&req.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return invalid_credentials(),
        Err(e) => {
            tracing::error!("Password verification failed: {}", e);
            return server_error("Failed to log in");
        }
    }

    let token = match keys.issue_token(user.id, &user.email) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to issue token: {}", e);
            return server_error("Failed to log in");
        }
    };

    HttpResponse::Ok().json(AuthResponse { user, token })
}

/// Current user record
///
/// GET /api/auth/me
async fn me(state: web::Data<AppState>, user: AuthedUser) -> impl Responder {
    match state.store.get_user(user.id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "User not found".to_string(),
            message: format!("No user with id {}", user.id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch user {}: {}", user.id, e);
            server_error("Failed to fetch user")
        }
    }
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "Invalid credentials".to_string(),
        message: "Email or password is incorrect".to_string(),
        status_code: 401,
    })
}

fn server_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Server error".to_string(),
        message: message.to_string(),
        status_code: 500,
    })
}
