use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthContext;
use crate::features::requests::dtos::{
    CreateWorksheetLineDto, UpdateWorksheetLineDto, WorksheetLineResponseDto,
};
use crate::features::requests::services::WorksheetService;
use crate::shared::types::ApiResponse;

/// List worksheet lines of a request
#[utoipa::path(
    get,
    path = "/api/requests/{id}/worksheet",
    params(("id" = Uuid, Path, description = "Request id")),
    responses(
        (status = 200, description = "Checklist steps", body = ApiResponse<Vec<WorksheetLineResponseDto>>),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "worksheet"
)]
pub async fn list_worksheet_lines(
    State(service): State<Arc<WorksheetService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<WorksheetLineResponseDto>>>> {
    let lines = service.list_by_request(&ctx, id).await?;
    Ok(Json(ApiResponse::success(Some(lines), None, None)))
}

/// Add a checklist step to a request
#[utoipa::path(
    post,
    path = "/api/requests/{id}/worksheet",
    params(("id" = Uuid, Path, description = "Request id")),
    request_body = CreateWorksheetLineDto,
    responses(
        (status = 200, description = "Step created", body = ApiResponse<WorksheetLineResponseDto>),
        (status = 404, description = "Request not found")
    ),
    security(("bearer_auth" = [])),
    tag = "worksheet"
)]
pub async fn create_worksheet_line(
    State(service): State<Arc<WorksheetService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateWorksheetLineDto>,
) -> Result<Json<ApiResponse<WorksheetLineResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let line = service.create(&ctx, id, dto).await?;
    Ok(Json(ApiResponse::success(Some(line), None, None)))
}

/// Update a checklist step
#[utoipa::path(
    patch,
    path = "/api/worksheet-lines/{id}",
    params(("id" = Uuid, Path, description = "Worksheet line id")),
    request_body = UpdateWorksheetLineDto,
    responses(
        (status = 200, description = "Step updated", body = ApiResponse<WorksheetLineResponseDto>),
        (status = 404, description = "Worksheet line not found")
    ),
    security(("bearer_auth" = [])),
    tag = "worksheet"
)]
pub async fn update_worksheet_line(
    State(service): State<Arc<WorksheetService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateWorksheetLineDto>,
) -> Result<Json<ApiResponse<WorksheetLineResponseDto>>> {
    let line = service.update(&ctx, id, dto).await?;
    Ok(Json(ApiResponse::success(Some(line), None, None)))
}

/// Delete a checklist step
#[utoipa::path(
    delete,
    path = "/api/worksheet-lines/{id}",
    params(("id" = Uuid, Path, description = "Worksheet line id")),
    responses(
        (status = 200, description = "Step deleted", body = ApiResponse<String>),
        (status = 404, description = "Worksheet line not found")
    ),
    security(("bearer_auth" = [])),
    tag = "worksheet"
)]
pub async fn delete_worksheet_line(
    State(service): State<Arc<WorksheetService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<String>>> {
    service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Worksheet line deleted".to_string()),
        None,
    )))
}
