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
use crate::features::users::dtos::{UpdateUserDto, UserResponseDto};
use crate::features::users::models::UserRole;
use crate::features::users::services::UserService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Query params for listing users
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// Filter by role (technician or manager)
    pub role: Option<UserRole>,
}

/// List users in the caller's company
#[utoipa::path(
    get,
    path = "/api/users",
    params(ListUsersQuery, PaginationQuery),
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponseDto>>),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
    ctx: AuthContext,
    Query(query): Query<ListUsersQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<UserResponseDto>>>> {
    let (users, total) = service.list(&ctx, query.role, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(users),
        None,
        Some(Meta { total }),
    )))
}

/// Get user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let user = service.get_by_id(&ctx, id).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}

/// Update a user's profile or team assignment
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponseDto>),
        (status = 403, description = "Role change requires manager"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn update_user(
    State(service): State<Arc<UserService>>,
    ctx: AuthContext,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.update(&ctx, id, dto).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}
