use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::work_centers::dtos::{
    CreateWorkCenterDto, UpdateWorkCenterDto, WorkCenterResponseDto,
};
use crate::features::work_centers::models::WorkCenter;
use crate::shared::validation::WORK_CENTER_CODE_REGEX;

const WORK_CENTER_COLUMNS: &str =
    "id, company_id, name, code, cost_per_hour, capacity, time_efficiency, oee_target, \
     alternative_work_center_id, created_at, updated_at";

/// Service for work center operations
pub struct WorkCenterService {
    pool: PgPool,
}

impl WorkCenterService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, ctx: &AuthContext) -> Result<Vec<WorkCenterResponseDto>> {
        let work_centers = sqlx::query_as::<_, WorkCenter>(&format!(
            "SELECT {WORK_CENTER_COLUMNS} FROM work_centers WHERE company_id = $1 ORDER BY name"
        ))
        .bind(ctx.company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list work centers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(work_centers.into_iter().map(|w| w.into()).collect())
    }

    pub async fn create(
        &self,
        ctx: &AuthContext,
        dto: CreateWorkCenterDto,
    ) -> Result<WorkCenterResponseDto> {
        if let Some(code) = &dto.code {
            validate_code(code)?;
        }

        let work_center = sqlx::query_as::<_, WorkCenter>(&format!(
            r#"
            INSERT INTO work_centers (
                company_id, name, code, cost_per_hour, capacity, time_efficiency,
                oee_target, alternative_work_center_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {WORK_CENTER_COLUMNS}
            "#
        ))
        .bind(ctx.company_id)
        .bind(&dto.name)
        .bind(&dto.code)
        .bind(dto.cost_per_hour)
        .bind(dto.capacity)
        .bind(dto.time_efficiency)
        .bind(dto.oee_target)
        .bind(dto.alternative_work_center_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create work center: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Work center created: id={}, name={}",
            work_center.id,
            work_center.name
        );

        Ok(work_center.into())
    }

    pub async fn get_by_id(&self, ctx: &AuthContext, id: Uuid) -> Result<WorkCenterResponseDto> {
        let work_center = sqlx::query_as::<_, WorkCenter>(&format!(
            "SELECT {WORK_CENTER_COLUMNS} FROM work_centers WHERE id = $1 AND company_id = $2"
        ))
        .bind(id)
        .bind(ctx.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get work center: {:?}", e);
            AppError::Database(e)
        })?;

        work_center
            .map(|w| w.into())
            .ok_or_else(|| AppError::NotFound(format!("Work center '{}' not found", id)))
    }

    pub async fn update(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        dto: UpdateWorkCenterDto,
    ) -> Result<WorkCenterResponseDto> {
        if let Some(Some(code)) = &dto.code {
            validate_code(code)?;
        }

        let mut query = QueryBuilder::new("UPDATE work_centers SET updated_at = now()");
        if let Some(name) = &dto.name {
            query.push(", name = ").push_bind(name);
        }
        if let Some(code) = &dto.code {
            query.push(", code = ").push_bind(code);
        }
        if let Some(cost_per_hour) = dto.cost_per_hour {
            query.push(", cost_per_hour = ").push_bind(cost_per_hour);
        }
        if let Some(capacity) = dto.capacity {
            query.push(", capacity = ").push_bind(capacity);
        }
        if let Some(time_efficiency) = dto.time_efficiency {
            query.push(", time_efficiency = ").push_bind(time_efficiency);
        }
        if let Some(oee_target) = dto.oee_target {
            query.push(", oee_target = ").push_bind(oee_target);
        }
        if let Some(alternative) = dto.alternative_work_center_id {
            query
                .push(", alternative_work_center_id = ")
                .push_bind(alternative);
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(" AND company_id = ").push_bind(ctx.company_id);
        query.push(format!(" RETURNING {WORK_CENTER_COLUMNS}"));

        let work_center = query
            .build_query_as::<WorkCenter>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update work center: {:?}", e);
                AppError::Database(e)
            })?;

        work_center
            .map(|w| w.into())
            .ok_or_else(|| AppError::NotFound(format!("Work center '{}' not found", id)))
    }

    pub async fn delete(&self, ctx: &AuthContext, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM work_centers WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(ctx.company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => AppError::Conflict(
                    "Work center is still referenced by equipment or requests".to_string(),
                ),
                _ => {
                    tracing::error!("Failed to delete work center: {:?}", e);
                    AppError::Database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Work center '{}' not found",
                id
            )));
        }

        Ok(())
    }
}

fn validate_code(code: &str) -> Result<()> {
    if !WORK_CENTER_CODE_REGEX.is_match(code) {
        return Err(AppError::Validation(format!(
            "Invalid work center code '{}': expected lowercase alphanumeric with hyphens",
            code
        )));
    }
    Ok(())
}
