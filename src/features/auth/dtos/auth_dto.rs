use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{User, UserRole};

/// Request DTO for company + manager signup
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub company_name: String,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Request DTO for login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Public view of a user (never exposes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub team_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
}

impl From<User> for AuthUserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            company_id: u.company_id,
            team_id: u.team_id,
            name: u.name,
            email: u.email,
            role: u.role,
            avatar_url: u.avatar_url,
        }
    }
}

/// Response DTO for register/login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: AuthUserDto,
}
