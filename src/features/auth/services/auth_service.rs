use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, AuthUserDto, LoginRequestDto, RegisterRequestDto};
use crate::features::auth::model::AuthContext;
use crate::features::auth::services::TokenService;
use crate::features::users::models::{User, UserRole};

const USER_COLUMNS: &str =
    "id, company_id, team_id, name, email, password_hash, role, avatar_url, created_at, updated_at";

/// Service for signup and login
pub struct AuthService {
    pool: PgPool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Create a company and its first manager account
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        let password_hash = hash_password(&dto.password)?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin registration transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let company_id: Uuid =
            sqlx::query_scalar("INSERT INTO companies (name) VALUES ($1) RETURNING id")
                .bind(&dto.company_name)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to create company: {:?}", e);
                    AppError::Database(e)
                })?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (company_id, name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(company_id)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(UserRole::Manager)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Email '{}' is already registered", dto.email))
            }
            _ => {
                tracing::error!("Failed to create user: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit registration: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Company registered: id={}, manager={}", company_id, user.id);

        let token = self.tokens.issue_token(&user)?;
        Ok(AuthResponseDto {
            token,
            user: user.into(),
        })
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(&dto.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user for login: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::Auth("Invalid email or password".to_string()))?;

        if !verify_password(&dto.password, &user.password_hash) {
            return Err(AppError::Auth("Invalid email or password".to_string()));
        }

        let token = self.tokens.issue_token(&user)?;
        Ok(AuthResponseDto {
            token,
            user: user.into(),
        })
    }

    /// Fetch the profile behind an authenticated context
    pub async fn me(&self, ctx: &AuthContext) -> Result<AuthUserDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND company_id = $2"
        ))
        .bind(ctx.user_id)
        .bind(ctx.company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch current user: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            AppError::Internal("Failed to hash password".to_string())
        })
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
