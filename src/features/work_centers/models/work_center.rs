use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for work center
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct WorkCenter {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub code: Option<String>,
    pub cost_per_hour: Option<Decimal>,
    pub capacity: Option<f64>,
    pub time_efficiency: Option<f64>,
    pub oee_target: Option<f64>,
    pub alternative_work_center_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
