use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// KPI counters for the landing dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub active_requests: u64,
    pub total_technicians: u64,
    pub active_technicians: u64,
    pub critical_equipment_count: u64,
    pub overdue_request_count: u64,
}

/// Per-stage tally for the report view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StageCountsDto {
    pub new: u64,
    pub in_progress: u64,
    pub repaired: u64,
    pub scrap: u64,
}

/// Equipment ranked by how often it shows up in requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentFaultDto {
    pub name: String,
    pub count: u64,
}

/// Technician ranked by resolved request count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechnicianScoreDto {
    pub name: String,
    pub resolved: u64,
    pub total_duration: f64,
    /// Average hours per resolved request, one decimal
    pub avg_speed: String,
}

/// One month bucket of the request-volume trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyTrendDto {
    /// Short month name, no year
    pub month: String,
    pub count: u64,
}

/// Full analytics report payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportStatsDto {
    pub stage_counts: StageCountsDto,
    /// Tallies for priorities 0 through 3, in order
    pub priority_counts: Vec<u64>,
    pub avg_duration: f64,
    pub top_faulty_equipment: Vec<EquipmentFaultDto>,
    pub top_technicians: Vec<TechnicianScoreDto>,
    pub monthly_trend: Vec<MonthlyTrendDto>,
}
