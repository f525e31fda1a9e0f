use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::equipment::models::Equipment;
use crate::shared::patch::double_option;

/// Response DTO for equipment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentResponseDto {
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
}

impl From<Equipment> for EquipmentResponseDto {
    fn from(e: Equipment) -> Self {
        Self {
            id: e.id,
            company_id: e.company_id,
            name: e.name,
            serial_number: e.serial_number,
            category: e.category,
            location: e.location,
            work_center_id: e.work_center_id,
            maintenance_team_id: e.maintenance_team_id,
            default_technician_id: e.default_technician_id,
            is_scrapped: e.is_scrapped,
            scrap_date: e.scrap_date,
            assigned_date: e.assigned_date,
            employee_id: e.employee_id,
        }
    }
}

/// DTO for registering equipment
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEquipmentDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub serial_number: String,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    pub location: Option<String>,
    pub work_center_id: Option<Uuid>,
    pub maintenance_team_id: Uuid,
    pub default_technician_id: Option<Uuid>,
    pub assigned_date: Option<NaiveDate>,
    pub employee_id: Option<Uuid>,
}

/// Sparse update DTO. `is_scrapped`/`scrap_date` are deliberately absent:
/// scrapping happens only through the request lifecycle.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEquipmentDto {
    pub name: Option<String>,
    pub category: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub work_center_id: Option<Option<Uuid>>,

    pub maintenance_team_id: Option<Uuid>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub default_technician_id: Option<Option<Uuid>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub assigned_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub employee_id: Option<Option<Uuid>>,
}

/// Per-equipment request count (backs the UI's smart button)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentRequestCountDto {
    pub equipment_id: Uuid,
    pub open_requests: i64,
    pub total_requests: i64,
}
