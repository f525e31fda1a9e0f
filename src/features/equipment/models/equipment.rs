use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for equipment
///
/// `is_scrapped` is one-way: the request lifecycle flips it true when a
/// request moves into the scrap stage, and nothing unsets it.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Equipment {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub location: Option<String>,
    pub work_center_id: Option<Uuid>,
    pub maintenance_team_id: Uuid,
    pub default_technician_id: Option<Uuid>,
    pub is_scrapped: bool,
    pub scrap_date: Option<NaiveDate>,
    pub assigned_date: Option<NaiveDate>,
    pub employee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
