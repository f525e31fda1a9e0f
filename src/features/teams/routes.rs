use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::teams::handlers;
use crate::features::teams::services::TeamService;

pub fn routes(service: Arc<TeamService>) -> Router {
    Router::new()
        .route(
            "/api/teams",
            get(handlers::list_teams).post(handlers::create_team),
        )
        .route(
            "/api/teams/{id}",
            get(handlers::get_team)
                .patch(handlers::update_team)
                .delete(handlers::delete_team),
        )
        .with_state(service)
}
