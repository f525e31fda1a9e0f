use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::equipment::dtos::{
    CreateEquipmentDto, EquipmentRequestCountDto, EquipmentResponseDto, UpdateEquipmentDto,
};
use crate::features::equipment::services::EquipmentService;
use crate::shared::types::ApiResponse;

/// Query params for listing equipment
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEquipmentQuery {
    /// Include scrapped equipment (default: false)
    #[serde(default)]
    pub include_scrapped: bool,

    /// Filter by maintenance team
    pub team_id: Option<Uuid>,
}

/// List equipment
#[utoipa::path(
    get,
    path = "/api/equipment",
    params(ListEquipmentQuery),
    responses(
        (status = 200, description = "List of equipment", body = ApiResponse<Vec<EquipmentResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "equipment"
)]
pub async fn list_equipment(
    State(service): State<Arc<EquipmentService>>,
    ctx: AuthContext,
    Query(query): Query<ListEquipmentQuery>,
) -> Result<Json<ApiResponse<Vec<EquipmentResponseDto>>>> {
    let equipment = service
        .list(&ctx, query.include_scrapped, query.team_id)
        .await?;
    Ok(Json(ApiResponse::success(Some(equipment), None, None)))
}

/// Register new equipment
#[utoipa::path(
    post,
    path = "/api/equipment",
    request_body = CreateEquipmentDto,
    responses(
        (status = 200, description = "Equipment created", body = ApiResponse<EquipmentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Serial number already registered")
    ),
    security(("bearer_auth" = [])),
    tag = "equipment"
)]
pub async fn create_equipment(
    State(service): State<Arc<EquipmentService>>,
    ctx: AuthContext,
    Json(dto): Json<CreateEquipmentDto>,
) -> Result<Json<ApiResponse<EquipmentResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let equipment = service.create(&ctx, dto).await?;
    Ok(Json(ApiResponse::success(Some(equipment), None, None)))
}

/// Get equipment by id
#[utoipa::path(
    get,
    path = "/api/equipment/{id}",
    params(("id" = Uuid, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "Equipment found", body = ApiResponse<EquipmentResponseDto>),
        (status = 404, description = "Equipment not found")
    ),
    security(("bearer_auth" = [])),
    tag = "equipment"
)]
pub async fn get_equipment(
    State(service): State<Arc<EquipmentService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EquipmentResponseDto>>> {
    let equipment = service.get_by_id(&ctx, id).await?;
    Ok(Json(ApiResponse::success(Some(equipment), None, None)))
}

/// Update equipment
#[utoipa::path(
    patch,
    path = "/api/equipment/{id}",
    params(("id" = Uuid, Path, description = "Equipment id")),
    request_body = UpdateEquipmentDto,
    responses(
        (status = 200, description = "Equipment updated", body = ApiResponse<EquipmentResponseDto>),
        (status = 404, description = "Equipment not found")
    ),
    security(("bearer_auth" = [])),
    tag = "equipment"
)]
pub async fn update_equipment(
    State(service): State<Arc<EquipmentService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateEquipmentDto>,
) -> Result<Json<ApiResponse<EquipmentResponseDto>>> {
    let equipment = service.update(&ctx, id, dto).await?;
    Ok(Json(ApiResponse::success(Some(equipment), None, None)))
}

/// Get request counts for one equipment record
#[utoipa::path(
    get,
    path = "/api/equipment/{id}/request-counts",
    params(("id" = Uuid, Path, description = "Equipment id")),
    responses(
        (status = 200, description = "Request counts", body = ApiResponse<EquipmentRequestCountDto>),
        (status = 404, description = "Equipment not found")
    ),
    security(("bearer_auth" = [])),
    tag = "equipment"
)]
pub async fn get_equipment_request_counts(
    State(service): State<Arc<EquipmentService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EquipmentRequestCountDto>>> {
    let counts = service.request_counts(&ctx, id).await?;
    Ok(Json(ApiResponse::success(Some(counts), None, None)))
}
