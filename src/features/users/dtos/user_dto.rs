use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{User, UserRole};

/// Response DTO for user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub team_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
}

impl From<User> for UserResponseDto {
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

/// DTO for profile and team-assignment updates. Absent fields are untouched;
/// `team_id: null` clears the assignment.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(url)]
    pub avatar_url: Option<String>,

    /// Wrapped in an explicit marker so "set to null" and "leave alone"
    /// are distinguishable in JSON
    #[serde(default, deserialize_with = "crate::shared::patch::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub team_id: Option<Option<Uuid>>,

    pub role: Option<UserRole>,
}
