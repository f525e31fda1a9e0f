use std::sync::Arc;

use axum::{routing::get, routing::post, Router};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Routes that require no authentication (register/login)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

/// Routes behind the auth middleware
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::get_me))
        .with_state(service)
}
