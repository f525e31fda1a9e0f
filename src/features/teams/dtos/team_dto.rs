use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::teams::models::Team;

/// Response DTO for team
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponseDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
}

impl From<Team> for TeamResponseDto {
    fn from(t: Team) -> Self {
        Self {
            id: t.id,
            company_id: t.company_id,
            name: t.name,
        }
    }
}

/// DTO for creating a team
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTeamDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// DTO for renaming a team
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}
