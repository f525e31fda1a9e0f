use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthContext;
use crate::features::users::dtos::{UpdateUserDto, UserResponseDto};
use crate::features::users::models::{User, UserRole};
use crate::shared::types::PaginationQuery;

/// Service for user operations
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List users in the caller's company, optionally filtered by role.
    /// Returns the page plus the unfiltered-by-page total for meta.
    pub async fn list(
        &self,
        ctx: &AuthContext,
        role: Option<UserRole>,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<UserResponseDto>, i64)> {
        let mut count_query =
            QueryBuilder::new("SELECT COUNT(*) FROM users WHERE company_id = ");
        count_query.push_bind(ctx.company_id);
        if let Some(role) = role {
            count_query.push(" AND role = ").push_bind(role);
        }
        let total = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count users: {:?}", e);
                AppError::Database(e)
            })?;

        let mut query = QueryBuilder::new(
            "SELECT id, company_id, team_id, name, email, password_hash, role, avatar_url, \
             created_at, updated_at FROM users WHERE company_id = ",
        );
        query.push_bind(ctx.company_id);
        if let Some(role) = role {
            query.push(" AND role = ").push_bind(role);
        }
        query.push(" ORDER BY name");
        query.push(" LIMIT ").push_bind(pagination.limit());
        query.push(" OFFSET ").push_bind(pagination.offset());

        let users = query
            .build_query_as::<User>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((users.into_iter().map(|u| u.into()).collect(), total))
    }

    /// Get a user by id within the caller's company
    pub async fn get_by_id(&self, ctx: &AuthContext, id: Uuid) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, company_id, team_id, name, email, password_hash, role, avatar_url, \
             created_at, updated_at FROM users WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(ctx.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    /// Update profile fields and team assignment
    pub async fn update(
        &self,
        ctx: &AuthContext,
        id: Uuid,
        dto: UpdateUserDto,
    ) -> Result<UserResponseDto> {
        // Role changes are a manager-only action; everything else is open to
        // the user themselves (route-level policy keeps this simple)
        if dto.role.is_some() && !ctx.is_manager() {
            return Err(AppError::Forbidden(
                "Only managers can change user roles".to_string(),
            ));
        }

        let mut query = QueryBuilder::new("UPDATE users SET updated_at = now()");
        if let Some(name) = &dto.name {
            query.push(", name = ").push_bind(name);
        }
        if let Some(avatar_url) = &dto.avatar_url {
            query.push(", avatar_url = ").push_bind(avatar_url);
        }
        if let Some(team_id) = dto.team_id {
            query.push(", team_id = ").push_bind(team_id);
        }
        if let Some(role) = dto.role {
            query.push(", role = ").push_bind(role);
        }
        query.push(" WHERE id = ").push_bind(id);
        query.push(" AND company_id = ").push_bind(ctx.company_id);
        query.push(
            " RETURNING id, company_id, team_id, name, email, password_hash, role, avatar_url, \
             created_at, updated_at",
        );

        let user = query
            .build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update user: {:?}", e);
                AppError::Database(e)
            })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }
}
