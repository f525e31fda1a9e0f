use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", get(handlers::list_users))
        .route(
            "/api/users/{id}",
            get(handlers::get_user).patch(handlers::update_user),
        )
        .with_state(service)
}
