use sqlx::{PgPool, QueryBuilder, Row};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::equipment::dtos::{
    CreateEquipmentDto, EquipmentRequestCountDto, EquipmentResponseDto, UpdateEquipmentDto,
};
use crate::features::equipment::models::Equipment;
use crate::shared::validation::SERIAL_NUMBER_REGEX;

const EQUIPMENT_COLUMNS: &str =
    "id, company_id, name, serial_number, category, location, work_center_id, \
     maintenance_team_id, default_technician_id, is_scrapped, scrap_date, assigned_date, \
     employee_id, created_at, updated_at";

/// Service for equipment operations
pub struct EquipmentService {
    pool: PgPool,
}

impl EquipmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List equipment in the caller's company. Scrapped equipment is included
    /// unless `include_scrapped` is false (kanban hides it by default).
    pub async fn list(
        &self,
        ctx: &AuthContext,
        include_scrapped: bool,
        team_id: Option<Uuid>,
    ) -> Result<Vec<EquipmentResponseDto>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment WHERE company_id = "
        ));
        query.push_bind(ctx.company_id);
        if !include_scrapped {
            query.push(" AND is_scrapped = FALSE");
        }
        if let Some(team_id) = team_id {
            query.push(" AND maintenance_team_id = ").push_bind(team_id);
        }
        query.push(" ORDER BY name");

        let equipment = query
            .build_query_as::<Equipment>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list equipment: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(equipment.into_iter().map(|e| e.into()).collect())
    }

    pub async fn create(
        &self,
        ctx: &AuthContext,
        dto: CreateEquipmentDto,
    ) -> Result<EquipmentResponseDto> {
        if !SERIAL_NUMBER_REGEX.is_match(&dto.serial_number) {
            return Err(AppError::Validation(format!(
                "Invalid serial number '{}': expected uppercase alphanumeric with hyphens",
                dto.serial_number
            )));
        }

        let equipment = sqlx::query_as::<_, Equipment>(&format!(
            r#"
            INSERT INTO equipment (
                company_id, name, serial_number, category, location, work_center_id,
                maintenance_team_id, default_technician_id, assigned_date, employee_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {EQUIPMENT_COLUMNS}
            "#
        ))
        .bind(ctx.company_id)
        .bind(&dto.name)
        .bind(&dto.serial_number)
        .bind(&dto.category)
        .bind(&dto.location)
        .bind(dto.work_center_id)
        .bind(dto.maintenance_team_id)
        .bind(dto.default_technician_id)
        .bind(dto.assigned_date)
        .bind(dto.employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(format!(
                "Serial number '{}' is already registered",
                dto.serial_number
            )),
            _ => {
                tracing::error!("Failed to create equipment: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tracing::info!(
            "Equipment created: id={}, serial={}",
            equipment.id,
            equipment.serial_number
        );

        Ok(equipment.into())
    }

    pub async fn get_by_id(&self, ctx: &AuthContext, id: Uuid) -> Result<EquipmentResponseDto> {
        let equipment = sqlx::query_as::<_, Equipment>(&format!(
            "SELECT {EQUIPMENT_COLUMNS} FROM equipment WHERE id = $1 AND company_id = $2"
        ))
        .bind(id)
        .bind(ctx.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get equipment: {:?}", e);
            AppError::Database(e)
        })?;

        equipment
            .map(|e| e.into())
            .ok_or_else(|| AppError::NotFound(format!("Equipment '{}' not found", id)))
    }

    pub async fn update(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        dto: UpdateEquipmentDto,
    ) -> Result<EquipmentResponseDto> {
        let mut query = QueryBuilder::new("UPDATE equipment SET updated_at = now()");
        if let Some(name) = &dto.name {
            query.push(", name = ").push_bind(name);
        }
        if let Some(category) = &dto.category {
            query.push(", category = ").push_bind(category);
        }
        if let Some(location) = &dto.location {
            query.push(", location = ").push_bind(location);
        }
        if let Some(work_center_id) = dto.work_center_id {
            query.push(", work_center_id = ").push_bind(work_center_id);
        }
        if let Some(maintenance_team_id) = dto.maintenance_team_id {
            query
                .push(", maintenance_team_id = ")
                .push_bind(maintenance_team_id);
        }
        if let Some(default_technician_id) = dto.default_technician_id {
            query
                .push(", default_technician_id = ")
                .push_bind(default_technician_id);
        }
        if let Some(assigned_date) = dto.assigned_date {
            query.push(", assigned_date = ").push_bind(assigned_date);
        }
        if let Some(employee_id) = dto.employee_id {
            query.push(", employee_id = ").push_bind(employee_id);
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(" AND company_id = ").push_bind(ctx.company_id);
        query.push(format!(" RETURNING {EQUIPMENT_COLUMNS}"));

        let equipment = query
            .build_query_as::<Equipment>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update equipment: {:?}", e);
                AppError::Database(e)
            })?;

        equipment
            .map(|e| e.into())
            .ok_or_else(|| AppError::NotFound(format!("Equipment '{}' not found", id)))
    }

    /// Request counts for one equipment record (smart-button data)
    pub async fn request_counts(
        &self,
        ctx: &AuthContext,
        id: Uuid,
    ) -> Result<EquipmentRequestCountDto> {
        // 404 for foreign ids before counting
        self.get_by_id(ctx, id).await?;

        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total_requests,
                COUNT(*) FILTER (WHERE stage NOT IN ('repaired', 'scrap')) AS open_requests
            FROM maintenance_requests
            WHERE equipment_id = $1 AND company_id = $2
            "#,
        )
        .bind(id)
        .bind(ctx.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count equipment requests: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(EquipmentRequestCountDto {
            equipment_id: id,
            open_requests: row.get("open_requests"),
            total_requests: row.get("total_requests"),
        })
    }
}
