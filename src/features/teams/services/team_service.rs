use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::teams::dtos::{CreateTeamDto, TeamResponseDto, UpdateTeamDto};
use crate::features::teams::models::Team;

const TEAM_COLUMNS: &str = "id, company_id, name, created_at, updated_at";

/// Service for team operations
pub struct TeamService {
    pool: PgPool,
}

impl TeamService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, ctx: &AuthContext) -> Result<Vec<TeamResponseDto>> {
        let teams = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE company_id = $1 ORDER BY name"
        ))
        .bind(ctx.company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list teams: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(teams.into_iter().map(|t| t.into()).collect())
    }

    pub async fn create(&self, ctx: &AuthContext, dto: CreateTeamDto) -> Result<TeamResponseDto> {
        let team = sqlx::query_as::<_, Team>(&format!(
            "INSERT INTO teams (company_id, name) VALUES ($1, $2) RETURNING {TEAM_COLUMNS}"
        ))
        .bind(ctx.company_id)
        .bind(&dto.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create team: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Team created: id={}, name={}", team.id, team.name);

        Ok(team.into())
    }

    pub async fn get_by_id(&self, ctx: &AuthContext, id: Uuid) -> Result<TeamResponseDto> {
        let team = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1 AND company_id = $2"
        ))
        .bind(id)
        .bind(ctx.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get team: {:?}", e);
            AppError::Database(e)
        })?;

        team.map(|t| t.into())
            .ok_or_else(|| AppError::NotFound(format!("Team '{}' not found", id)))
    }

    pub async fn update(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        dto: UpdateTeamDto,
    ) -> Result<TeamResponseDto> {
        let team = sqlx::query_as::<_, Team>(&format!(
            "UPDATE teams SET name = $1, updated_at = now() \
             WHERE id = $2 AND company_id = $3 RETURNING {TEAM_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(id)
        .bind(ctx.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update team: {:?}", e);
            AppError::Database(e)
        })?;

        team.map(|t| t.into())
            .ok_or_else(|| AppError::NotFound(format!("Team '{}' not found", id)))
    }

    pub async fn delete(&self, ctx: &AuthContext, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(ctx.company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    AppError::Conflict("Team is still referenced by equipment or requests".to_string())
                }
                _ => {
                    tracing::error!("Failed to delete team: {:?}", e);
                    AppError::Database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team '{}' not found", id)));
        }

        Ok(())
    }
}
