use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Workflow stage of a maintenance request.
///
/// The four stages are a flat label set: any stage can move to any other
/// stage. Scrap and repaired are end states by convention only; nothing
/// prevents leaving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "maintenance_stage", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStage {
    New,
    InProgress,
    Repaired,
    Scrap,
}

impl MaintenanceStage {
    /// Stages that still count as active work
    pub fn is_active(&self) -> bool {
        !matches!(self, MaintenanceStage::Repaired | MaintenanceStage::Scrap)
    }
}

impl std::fmt::Display for MaintenanceStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaintenanceStage::New => write!(f, "new"),
            MaintenanceStage::InProgress => write!(f, "in_progress"),
            MaintenanceStage::Repaired => write!(f, "repaired"),
            MaintenanceStage::Scrap => write!(f, "scrap"),
        }
    }
}

/// Corrective vs preventive maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "maintenance_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    Corrective,
    Preventive,
}

/// What a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "maintenance_scope", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceScope {
    Equipment,
    WorkCenter,
    Other,
}

/// Database model for maintenance request
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub company_id: Uuid,
    pub subject: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub maintenance_scope: MaintenanceScope,
    pub equipment_id: Option<Uuid>,
    pub work_center_id: Option<Uuid>,
    pub team_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub kind: MaintenanceKind,
    pub stage: MaintenanceStage,
    pub priority: i32,
    pub request_date: NaiveDate,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub duration: Option<f64>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request row joined with equipment/technician display names, used by the
/// kanban/calendar listings and the analytics report
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct MaintenanceRequestWithNames {
    #[sqlx(flatten)]
    pub request: MaintenanceRequest,
    pub equipment_name: Option<String>,
    pub technician_name: Option<String>,
}
