use chrono::Utc;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::dashboard::dtos::{DashboardStatsDto, ReportStatsDto};
use crate::features::dashboard::models::RequestSnapshot;
use crate::features::dashboard::services::stats;
use crate::features::users::models::UserRole;

/// Loads a company's request set and hands it to the pure aggregation
/// functions in [`stats`]. Rows are pulled fresh on every call.
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_snapshots(&self, ctx: &AuthContext) -> Result<Vec<RequestSnapshot>> {
        sqlx::query_as::<_, RequestSnapshot>(
            "SELECT r.stage, r.priority, r.duration, r.equipment_id, e.name AS equipment_name, \
                 r.technician_id, u.name AS technician_name, r.request_date, \
                 r.scheduled_date, r.created_at \
             FROM maintenance_requests r \
             LEFT JOIN equipment e ON e.id = r.equipment_id \
             LEFT JOIN users u ON u.id = r.technician_id \
             WHERE r.company_id = $1",
        )
        .bind(ctx.company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load request snapshots: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn count_technicians(&self, ctx: &AuthContext) -> Result<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE company_id = $1 AND role = $2",
        )
        .bind(ctx.company_id)
        .bind(UserRole::Technician)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count technicians: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(count as u64)
    }

    pub async fn dashboard_stats(&self, ctx: &AuthContext) -> Result<DashboardStatsDto> {
        let snapshots = self.load_snapshots(ctx).await?;
        let total_technicians = self.count_technicians(ctx).await?;
        Ok(stats::compute_dashboard_stats(
            &snapshots,
            total_technicians,
            Utc::now(),
        ))
    }

    pub async fn report_stats(&self, ctx: &AuthContext) -> Result<ReportStatsDto> {
        let snapshots = self.load_snapshots(ctx).await?;
        Ok(stats::compute_report_stats(&snapshots, Utc::now()))
    }
}
