use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::work_centers::dtos::{
    CreateWorkCenterDto, UpdateWorkCenterDto, WorkCenterResponseDto,
};
use crate::features::work_centers::services::WorkCenterService;
use crate::shared::types::ApiResponse;

/// List work centers
#[utoipa::path(
    get,
    path = "/api/work-centers",
    responses(
        (status = 200, description = "List of work centers", body = ApiResponse<Vec<WorkCenterResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "work-centers"
)]
pub async fn list_work_centers(
    State(service): State<Arc<WorkCenterService>>,
    ctx: AuthContext,
) -> Result<Json<ApiResponse<Vec<WorkCenterResponseDto>>>> {
    let work_centers = service.list(&ctx).await?;
    Ok(Json(ApiResponse::success(Some(work_centers), None, None)))
}

/// Create a work center
#[utoipa::path(
    post,
    path = "/api/work-centers",
    request_body = CreateWorkCenterDto,
    responses(
        (status = 200, description = "Work center created", body = ApiResponse<WorkCenterResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "work-centers"
)]
pub async fn create_work_center(
    State(service): State<Arc<WorkCenterService>>,
    ctx: AuthContext,
    Json(dto): Json<CreateWorkCenterDto>,
) -> Result<Json<ApiResponse<WorkCenterResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let work_center = service.create(&ctx, dto).await?;
    Ok(Json(ApiResponse::success(Some(work_center), None, None)))
}

/// Get work center by id
#[utoipa::path(
    get,
    path = "/api/work-centers/{id}",
    params(("id" = Uuid, Path, description = "Work center id")),
    responses(
        (status = 200, description = "Work center found", body = ApiResponse<WorkCenterResponseDto>),
        (status = 404, description = "Work center not found")
    ),
    security(("bearer_auth" = [])),
    tag = "work-centers"
)]
pub async fn get_work_center(
    State(service): State<Arc<WorkCenterService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WorkCenterResponseDto>>> {
    let work_center = service.get_by_id(&ctx, id).await?;
    Ok(Json(ApiResponse::success(Some(work_center), None, None)))
}

/// Update a work center
#[utoipa::path(
    patch,
    path = "/api/work-centers/{id}",
    params(("id" = Uuid, Path, description = "Work center id")),
    request_body = UpdateWorkCenterDto,
    responses(
        (status = 200, description = "Work center updated", body = ApiResponse<WorkCenterResponseDto>),
        (status = 404, description = "Work center not found")
    ),
    security(("bearer_auth" = [])),
    tag = "work-centers"
)]
pub async fn update_work_center(
    State(service): State<Arc<WorkCenterService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateWorkCenterDto>,
) -> Result<Json<ApiResponse<WorkCenterResponseDto>>> {
    let work_center = service.update(&ctx, id, dto).await?;
    Ok(Json(ApiResponse::success(Some(work_center), None, None)))
}

/// Delete a work center
#[utoipa::path(
    delete,
    path = "/api/work-centers/{id}",
    params(("id" = Uuid, Path, description = "Work center id")),
    responses(
        (status = 200, description = "Work center deleted"),
        (status = 404, description = "Work center not found"),
        (status = 409, description = "Work center still referenced")
    ),
    security(("bearer_auth" = [])),
    tag = "work-centers"
)]
pub async fn delete_work_center(
    State(service): State<Arc<WorkCenterService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Work center deleted".to_string()),
        None,
    )))
}
