use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthContext;
use crate::features::requests::dtos::{
    CreateMaintenanceRequestDto, MaintenanceRequestResponseDto, UpdateMaintenanceRequestDto,
};
use crate::features::requests::models::{MaintenanceScope, MaintenanceStage};
use crate::features::requests::services::{RequestFilters, RequestService};
use crate::shared::types::ApiResponse;

/// Query params for the request listing, shared by the kanban and calendar views
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRequestsQuery {
    pub stage: Option<MaintenanceStage>,
    pub maintenance_scope: Option<MaintenanceScope>,
    pub team_id: Option<Uuid>,
    pub technician_id: Option<Uuid>,
    pub equipment_id: Option<Uuid>,

    /// Lower bound on scheduled_date, inclusive
    pub scheduled_from: Option<DateTime<Utc>>,

    /// Upper bound on scheduled_date, inclusive
    pub scheduled_to: Option<DateTime<Utc>>,
}

/// List maintenance requests
#[utoipa::path(
    get,
    path = "/api/requests",
    params(ListRequestsQuery),
    responses(
        (status = 200, description = "List of maintenance requests", body = ApiResponse<Vec<MaintenanceRequestResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn list_requests(
    State(service): State<Arc<RequestService>>,
    ctx: AuthContext,
    Query(query): Query<ListRequestsQuery>,
) -> Result<Json<ApiResponse<Vec<MaintenanceRequestResponseDto>>>> {
    let filters = RequestFilters {
        stage: query.stage,
        maintenance_scope: query.maintenance_scope,
        team_id: query.team_id,
        technician_id: query.technician_id,
        equipment_id: query.equipment_id,
        scheduled_from: query.scheduled_from,
        scheduled_to: query.scheduled_to,
    };

    let requests = service.list(&ctx, &filters).await?;
    Ok(Json(ApiResponse::success(Some(requests), None, None)))
}

/// Create a maintenance request
#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CreateMaintenanceRequestDto,
    responses(
        (status = 200, description = "Request created", body = ApiResponse<MaintenanceRequestResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn create_request(
    State(service): State<Arc<RequestService>>,
    ctx: AuthContext,
    AppJson(dto): AppJson<CreateMaintenanceRequestDto>,
) -> Result<Json<ApiResponse<MaintenanceRequestResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = service.create(&ctx, dto).await?;
    Ok(Json(ApiResponse::success(Some(request), None, None)))
}

/// Get a maintenance request by id
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    params(("id" = Uuid, Path, description = "Request id")),
    responses(
        (status = 200, description = "Request found", body = ApiResponse<MaintenanceRequestResponseDto>),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn get_request(
    State(service): State<Arc<RequestService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MaintenanceRequestResponseDto>>> {
    let request = service.get_by_id(&ctx, id).await?;
    Ok(Json(ApiResponse::success(Some(request), None, None)))
}

/// Update a maintenance request.
///
/// Drives the stage lifecycle: any stage can be set from any other stage,
/// and setting stage to `scrap` also flags the linked equipment as scrapped.
#[utoipa::path(
    patch,
    path = "/api/requests/{id}",
    params(("id" = Uuid, Path, description = "Request id")),
    request_body = UpdateMaintenanceRequestDto,
    responses(
        (status = 200, description = "Request updated", body = ApiResponse<MaintenanceRequestResponseDto>),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "requests"
)]
pub async fn update_request(
    State(service): State<Arc<RequestService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateMaintenanceRequestDto>,
) -> Result<Json<ApiResponse<MaintenanceRequestResponseDto>>> {
    let request = service.update_request(&ctx, id, dto.normalize()).await?;
    Ok(Json(ApiResponse::success(Some(request), None, None)))
}
