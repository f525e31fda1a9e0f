use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AuthResponseDto, AuthUserDto, LoginRequestDto, RegisterRequestDto,
};
use crate::features::auth::model::AuthContext;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;

/// Register a new company with its first manager account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequestDto,
    responses(
        (status = 200, description = "Company and manager created", body = ApiResponse<AuthResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    Json(dto): Json<RegisterRequestDto>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.register(dto).await?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Authenticated", body = ApiResponse<AuthResponseDto>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    Json(dto): Json<LoginRequestDto>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.login(dto).await?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Get the currently authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<AuthUserDto>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn get_me(
    State(service): State<Arc<AuthService>>,
    ctx: AuthContext,
) -> Result<Json<ApiResponse<AuthUserDto>>> {
    let user = service.me(&ctx).await?;
    Ok(Json(ApiResponse::success(Some(user), None, None)))
}
