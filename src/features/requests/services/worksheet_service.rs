use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::requests::dtos::{
    CreateWorksheetLineDto, UpdateWorksheetLineDto, WorksheetLineResponseDto,
};
use crate::features::requests::models::WorksheetLine;

const WORKSHEET_COLUMNS: &str =
    "w.id, w.maintenance_request_id, w.content, w.is_done, w.line_order, w.created_at";

/// Service for worksheet checklist lines attached to maintenance requests
pub struct WorksheetService {
    pool: PgPool,
}

impl WorksheetService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Confirms the parent request exists and belongs to the caller's company
    async fn assert_request_visible(&self, ctx: &AuthContext, request_id: Uuid) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM maintenance_requests \
             WHERE id = $1 AND company_id = $2)",
        )
        .bind(request_id)
        .bind(ctx.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check maintenance request ownership: {:?}", e);
            AppError::Database(e)
        })?;

        if exists {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "Maintenance request '{}' not found",
                request_id
            )))
        }
    }

    pub async fn list_by_request(
        &self,
        ctx: &AuthContext,
        request_id: Uuid,
    ) -> Result<Vec<WorksheetLineResponseDto>> {
        self.assert_request_visible(ctx, request_id).await?;

        let lines = sqlx::query_as::<_, WorksheetLine>(&format!(
            "SELECT {WORKSHEET_COLUMNS} FROM worksheet_lines w \
             WHERE w.maintenance_request_id = $1 \
             ORDER BY w.line_order, w.created_at"
        ))
        .bind(request_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list worksheet lines: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(lines.into_iter().map(|l| l.into()).collect())
    }

    pub async fn create(
        &self,
        ctx: &AuthContext,
        request_id: Uuid,
        dto: CreateWorksheetLineDto,
    ) -> Result<WorksheetLineResponseDto> {
        self.assert_request_visible(ctx, request_id).await?;

        // Absent line_order appends after the current last line
        let line = sqlx::query_as::<_, WorksheetLine>(
            "INSERT INTO worksheet_lines (maintenance_request_id, content, line_order) \
             VALUES ($1, $2, COALESCE($3, (\
                 SELECT COALESCE(MAX(line_order), 0) + 1 FROM worksheet_lines \
                 WHERE maintenance_request_id = $1))) \
             RETURNING id, maintenance_request_id, content, is_done, line_order, created_at",
        )
        .bind(request_id)
        .bind(&dto.content)
        .bind(dto.line_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create worksheet line: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(line.into())
    }

    pub async fn update(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        dto: UpdateWorksheetLineDto,
    ) -> Result<WorksheetLineResponseDto> {
        let line = sqlx::query_as::<_, WorksheetLine>(
            "UPDATE worksheet_lines w SET \
                 content = COALESCE($3, w.content), \
                 is_done = COALESCE($4, w.is_done), \
                 line_order = COALESCE($5, w.line_order) \
             FROM maintenance_requests r \
             WHERE w.id = $1 AND r.id = w.maintenance_request_id AND r.company_id = $2 \
             RETURNING w.id, w.maintenance_request_id, w.content, w.is_done, \
                 w.line_order, w.created_at",
        )
        .bind(id)
        .bind(ctx.company_id)
        .bind(&dto.content)
        .bind(dto.is_done)
        .bind(dto.line_order)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update worksheet line: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Worksheet line '{}' not found", id)))?;

        Ok(line.into())
    }

    pub async fn delete(&self, ctx: &AuthContext, id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM worksheet_lines w \
             USING maintenance_requests r \
             WHERE w.id = $1 AND r.id = w.maintenance_request_id AND r.company_id = $2",
        )
        .bind(id)
        .bind(ctx.company_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete worksheet line: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Worksheet line '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
