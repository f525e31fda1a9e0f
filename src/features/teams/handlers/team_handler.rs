use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::teams::dtos::{CreateTeamDto, TeamResponseDto, UpdateTeamDto};
use crate::features::teams::services::TeamService;
use crate::shared::types::ApiResponse;

/// List maintenance teams
#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "List of teams", body = ApiResponse<Vec<TeamResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn list_teams(
    State(service): State<Arc<TeamService>>,
    ctx: AuthContext,
) -> Result<Json<ApiResponse<Vec<TeamResponseDto>>>> {
    let teams = service.list(&ctx).await?;
    Ok(Json(ApiResponse::success(Some(teams), None, None)))
}

/// Create a maintenance team
#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamDto,
    responses(
        (status = 200, description = "Team created", body = ApiResponse<TeamResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn create_team(
    State(service): State<Arc<TeamService>>,
    ctx: AuthContext,
    Json(dto): Json<CreateTeamDto>,
) -> Result<Json<ApiResponse<TeamResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let team = service.create(&ctx, dto).await?;
    Ok(Json(ApiResponse::success(Some(team), None, None)))
}

/// Get team by id
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(("id" = Uuid, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team found", body = ApiResponse<TeamResponseDto>),
        (status = 404, description = "Team not found")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn get_team(
    State(service): State<Arc<TeamService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TeamResponseDto>>> {
    let team = service.get_by_id(&ctx, id).await?;
    Ok(Json(ApiResponse::success(Some(team), None, None)))
}

/// Rename a team
#[utoipa::path(
    patch,
    path = "/api/teams/{id}",
    params(("id" = Uuid, Path, description = "Team id")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = ApiResponse<TeamResponseDto>),
        (status = 404, description = "Team not found")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn update_team(
    State(service): State<Arc<TeamService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateTeamDto>,
) -> Result<Json<ApiResponse<TeamResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let team = service.update(&ctx, id, dto).await?;
    Ok(Json(ApiResponse::success(Some(team), None, None)))
}

/// Delete a team
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(("id" = Uuid, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team deleted"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "Team still referenced")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn delete_team(
    State(service): State<Arc<TeamService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&ctx, id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Team deleted".to_string()),
        None,
    )))
}
