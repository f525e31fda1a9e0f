use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a worksheet line (checklist step on a request)
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct WorksheetLine {
    pub id: Uuid,
    pub maintenance_request_id: Uuid,
    pub content: String,
    pub is_done: bool,
    pub line_order: i32,
    pub created_at: DateTime<Utc>,
}
