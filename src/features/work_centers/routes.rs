use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::work_centers::handlers;
use crate::features::work_centers::services::WorkCenterService;

pub fn routes(service: Arc<WorkCenterService>) -> Router {
    Router::new()
        .route(
            "/api/work-centers",
            get(handlers::list_work_centers).post(handlers::create_work_center),
        )
        .route(
            "/api/work-centers/{id}",
            get(handlers::get_work_center)
                .patch(handlers::update_work_center)
                .delete(handlers::delete_work_center),
        )
        .with_state(service)
}
