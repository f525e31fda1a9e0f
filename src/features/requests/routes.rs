use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::requests::handlers;
use crate::features::requests::services::{RequestService, WorksheetService};

pub fn routes(
    request_service: Arc<RequestService>,
    worksheet_service: Arc<WorksheetService>,
) -> Router {
    let requests = Router::new()
        .route(
            "/api/requests",
            get(handlers::list_requests).post(handlers::create_request),
        )
        .route(
            "/api/requests/{id}",
            get(handlers::get_request).patch(handlers::update_request),
        )
        .with_state(request_service);

    let worksheet = Router::new()
        .route(
            "/api/requests/{id}/worksheet",
            get(handlers::list_worksheet_lines).post(handlers::create_worksheet_line),
        )
        .route(
            "/api/worksheet-lines/{id}",
            patch(handlers::update_worksheet_line).delete(handlers::delete_worksheet_line),
        )
        .with_state(worksheet_service);

    requests.merge(worksheet)
}
