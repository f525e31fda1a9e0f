use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::requests::dtos::{
    CreateMaintenanceRequestDto, MaintenanceRequestResponseDto,
};
use crate::features::requests::models::{
    MaintenanceRequest, MaintenanceRequestWithNames, MaintenanceScope, MaintenanceStage,
};
use crate::features::requests::patch::{equipment_to_scrap, RequestPatch};

const REQUEST_COLUMNS: &str =
    "r.id, r.company_id, r.subject, r.description, r.category, r.maintenance_scope, \
     r.equipment_id, r.work_center_id, r.team_id, r.technician_id, r.kind, r.stage, \
     r.priority, r.request_date, r.scheduled_date, r.duration, r.created_by, \
     r.created_at, r.updated_at";

/// Filters for the kanban/calendar request listings
#[derive(Debug, Clone, Default)]
pub struct RequestFilters {
    pub stage: Option<MaintenanceStage>,
    pub maintenance_scope: Option<MaintenanceScope>,
    pub team_id: Option<Uuid>,
    pub technician_id: Option<Uuid>,
    pub equipment_id: Option<Uuid>,
    pub scheduled_from: Option<DateTime<Utc>>,
    pub scheduled_to: Option<DateTime<Utc>>,
}

/// Service for maintenance request operations, including the stage lifecycle
pub struct RequestService {
    pool: PgPool,
}

impl RequestService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        ctx: &AuthContext,
        filters: &RequestFilters,
    ) -> Result<Vec<MaintenanceRequestResponseDto>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {REQUEST_COLUMNS}, e.name AS equipment_name, u.name AS technician_name \
             FROM maintenance_requests r \
             LEFT JOIN equipment e ON e.id = r.equipment_id \
             LEFT JOIN users u ON u.id = r.technician_id \
             WHERE r.company_id = "
        ));
        query.push_bind(ctx.company_id);

        if let Some(stage) = filters.stage {
            query.push(" AND r.stage = ").push_bind(stage);
        }
        if let Some(scope) = filters.maintenance_scope {
            query.push(" AND r.maintenance_scope = ").push_bind(scope);
        }
        if let Some(team_id) = filters.team_id {
            query.push(" AND r.team_id = ").push_bind(team_id);
        }
        if let Some(technician_id) = filters.technician_id {
            query.push(" AND r.technician_id = ").push_bind(technician_id);
        }
        if let Some(equipment_id) = filters.equipment_id {
            query.push(" AND r.equipment_id = ").push_bind(equipment_id);
        }
        if let Some(from) = filters.scheduled_from {
            query.push(" AND r.scheduled_date >= ").push_bind(from);
        }
        if let Some(to) = filters.scheduled_to {
            query.push(" AND r.scheduled_date <= ").push_bind(to);
        }
        query.push(" ORDER BY r.priority DESC, r.request_date, r.created_at");

        let rows = query
            .build_query_as::<MaintenanceRequestWithNames>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list maintenance requests: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn create(
        &self,
        ctx: &AuthContext,
        dto: CreateMaintenanceRequestDto,
    ) -> Result<MaintenanceRequestResponseDto> {
        // Fall back to the equipment's default technician when none is given
        let technician_id = match (dto.technician_id, dto.equipment_id) {
            (None, Some(equipment_id)) => {
                sqlx::query_scalar::<_, Option<Uuid>>(
                    "SELECT default_technician_id FROM equipment \
                     WHERE id = $1 AND company_id = $2",
                )
                .bind(equipment_id)
                .bind(ctx.company_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to look up default technician: {:?}", e);
                    AppError::Database(e)
                })?
                .flatten()
            }
            (technician_id, _) => technician_id,
        };

        let request_date = dto
            .request_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let request = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests (
                company_id, subject, description, category, maintenance_scope,
                equipment_id, work_center_id, team_id, technician_id, kind,
                priority, request_date, scheduled_date, duration, created_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id, company_id, subject, description, category, maintenance_scope,
                equipment_id, work_center_id, team_id, technician_id, kind, stage,
                priority, request_date, scheduled_date, duration, created_by,
                created_at, updated_at
            "#,
        )
        .bind(ctx.company_id)
        .bind(&dto.subject)
        .bind(&dto.description)
        .bind(&dto.category)
        .bind(dto.maintenance_scope)
        .bind(dto.equipment_id)
        .bind(dto.work_center_id)
        .bind(dto.team_id)
        .bind(technician_id)
        .bind(dto.kind)
        .bind(dto.priority)
        .bind(request_date)
        .bind(dto.scheduled_date)
        .bind(dto.duration)
        .bind(ctx.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create maintenance request: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Maintenance request created: id={}, subject={}",
            request.id,
            request.subject
        );

        self.get_by_id(ctx, request.id).await
    }

    pub async fn get_by_id(
        &self,
        ctx: &AuthContext,
        id: Uuid,
    ) -> Result<MaintenanceRequestResponseDto> {
        let row = sqlx::query_as::<_, MaintenanceRequestWithNames>(&format!(
            "SELECT {REQUEST_COLUMNS}, e.name AS equipment_name, u.name AS technician_name \
             FROM maintenance_requests r \
             LEFT JOIN equipment e ON e.id = r.equipment_id \
             LEFT JOIN users u ON u.id = r.technician_id \
             WHERE r.id = $1 AND r.company_id = $2"
        ))
        .bind(id)
        .bind(ctx.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get maintenance request: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Maintenance request '{}' not found", id)))
    }

    /// Apply a sparse patch to a request.
    ///
    /// Any stage value is accepted from any prior stage; the four stages are
    /// labels, not a transition graph. Moving into the scrap stage flags the
    /// request's equipment as scrapped with today's date. The request update
    /// and the equipment update are two separate writes; a failure in between
    /// leaves them inconsistent, which matches the accepted storage model
    /// (last-write-wins, no versioning).
    pub async fn update_request(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        patch: RequestPatch,
    ) -> Result<MaintenanceRequestResponseDto> {
        let mut query = QueryBuilder::new("UPDATE maintenance_requests SET updated_at = now()");
        if let Some(subject) = &patch.subject {
            query.push(", subject = ").push_bind(subject);
        }
        if let Some(description) = &patch.description {
            query.push(", description = ").push_bind(description);
        }
        if let Some(category) = &patch.category {
            query.push(", category = ").push_bind(category);
        }
        if let Some(stage) = patch.stage {
            query.push(", stage = ").push_bind(stage);
        }
        if let Some(kind) = patch.kind {
            query.push(", kind = ").push_bind(kind);
        }
        if let Some(scope) = patch.maintenance_scope {
            query.push(", maintenance_scope = ").push_bind(scope);
        }
        if let Some(priority) = patch.priority {
            // NULL priority falls back to the column default of 0
            query
                .push(", priority = COALESCE(")
                .push_bind(priority)
                .push(", 0)");
        }
        if let Some(duration) = patch.duration {
            query.push(", duration = ").push_bind(duration);
        }
        if let Some(equipment_id) = patch.equipment_id {
            query.push(", equipment_id = ").push_bind(equipment_id);
        }
        if let Some(work_center_id) = patch.work_center_id {
            query.push(", work_center_id = ").push_bind(work_center_id);
        }
        if let Some(team_id) = patch.team_id {
            query.push(", team_id = ").push_bind(team_id);
        }
        if let Some(technician_id) = patch.technician_id {
            query.push(", technician_id = ").push_bind(technician_id);
        }
        if let Some(request_date) = patch.request_date {
            // Clearing the request date resets it to today
            query
                .push(", request_date = COALESCE(")
                .push_bind(request_date)
                .push(", CURRENT_DATE)");
        }
        if let Some(scheduled_date) = patch.scheduled_date {
            query.push(", scheduled_date = ").push_bind(scheduled_date);
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(" AND company_id = ").push_bind(ctx.company_id);
        query.push(
            " RETURNING id, company_id, subject, description, category, maintenance_scope, \
             equipment_id, work_center_id, team_id, technician_id, kind, stage, priority, \
             request_date, scheduled_date, duration, created_by, created_at, updated_at",
        );

        let updated = query
            .build_query_as::<MaintenanceRequest>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update maintenance request: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| {
                AppError::NotFound(format!("Maintenance request '{}' not found", id))
            })?;

        if let Some(equipment_id) = equipment_to_scrap(patch.stage, updated.equipment_id) {
            self.scrap_equipment(ctx, equipment_id).await?;
        }

        self.get_by_id(ctx, updated.id).await
    }

    /// Flag equipment as scrapped. Runs on every transition into the scrap
    /// stage; re-scrapping rewrites scrap_date to today.
    async fn scrap_equipment(&self, ctx: &AuthContext, equipment_id: Uuid) -> Result<()> {
        sqlx::query(
            "UPDATE equipment SET is_scrapped = TRUE, scrap_date = CURRENT_DATE, \
             updated_at = now() WHERE id = $1 AND company_id = $2",
        )
        .bind(equipment_id)
        .bind(ctx.company_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to flag equipment as scrapped: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Equipment scrapped via request lifecycle: id={}", equipment_id);

        Ok(())
    }
}
