use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::model::AuthContext;
use crate::features::dashboard::dtos::{DashboardStatsDto, ReportStatsDto};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Get dashboard KPI counters
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Dashboard counters", body = ApiResponse<DashboardStatsDto>),
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn get_dashboard_stats(
    State(service): State<Arc<DashboardService>>,
    ctx: AuthContext,
) -> Result<Json<ApiResponse<DashboardStatsDto>>> {
    let stats = service.dashboard_stats(&ctx).await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Get the analytics report
#[utoipa::path(
    get,
    path = "/api/dashboard/report",
    responses(
        (status = 200, description = "Analytics report", body = ApiResponse<ReportStatsDto>),
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn get_report_stats(
    State(service): State<Arc<DashboardService>>,
    ctx: AuthContext,
) -> Result<Json<ApiResponse<ReportStatsDto>>> {
    let report = service.report_stats(&ctx).await?;
    Ok(Json(ApiResponse::success(Some(report), None, None)))
}
