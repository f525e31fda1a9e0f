use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::equipment::handlers;
use crate::features::equipment::services::EquipmentService;

pub fn routes(service: Arc<EquipmentService>) -> Router {
    Router::new()
        .route(
            "/api/equipment",
            get(handlers::list_equipment).post(handlers::create_equipment),
        )
        .route(
            "/api/equipment/{id}",
            get(handlers::get_equipment).patch(handlers::update_equipment),
        )
        .route(
            "/api/equipment/{id}/request-counts",
            get(handlers::get_equipment_request_counts),
        )
        .with_state(service)
}
