use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::requests::models::MaintenanceStage;

/// The slice of a maintenance request the aggregation engine needs. Joined
/// names come along so rankings can be keyed by display name.
#[derive(Debug, Clone, FromRow)]
pub struct RequestSnapshot {
    pub stage: MaintenanceStage,
    pub priority: i32,
    pub duration: Option<f64>,
    pub equipment_id: Option<Uuid>,
    pub equipment_name: Option<String>,
    pub technician_id: Option<Uuid>,
    pub technician_name: Option<String>,
    pub request_date: NaiveDate,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
