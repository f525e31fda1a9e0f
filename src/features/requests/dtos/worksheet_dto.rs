use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::requests::models::WorksheetLine;

/// Response DTO for worksheet line
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorksheetLineResponseDto {
    pub id: Uuid,
    pub maintenance_request_id: Uuid,
    pub content: String,
    pub is_done: bool,
    pub line_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<WorksheetLine> for WorksheetLineResponseDto {
    fn from(l: WorksheetLine) -> Self {
        Self {
            id: l.id,
            maintenance_request_id: l.maintenance_request_id,
            content: l.content,
            is_done: l.is_done,
            line_order: l.line_order,
            created_at: l.created_at,
        }
    }
}

/// DTO for adding a checklist step
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateWorksheetLineDto {
    #[validate(length(min = 1, max = 500))]
    pub content: String,

    /// Appended to the end when absent
    pub line_order: Option<i32>,
}

/// DTO for editing a checklist step
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateWorksheetLineDto {
    pub content: Option<String>,
    pub is_done: Option<bool>,
    pub line_order: Option<i32>,
}
