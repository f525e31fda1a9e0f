use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::requests::models::{
    MaintenanceKind, MaintenanceRequest, MaintenanceRequestWithNames, MaintenanceScope,
    MaintenanceStage,
};
use crate::features::requests::patch::{
    coerce_date, coerce_datetime, coerce_float, coerce_int, RequestPatch,
};
use crate::shared::patch::double_option;

/// Response DTO for maintenance request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRequestResponseDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub subject: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub maintenance_scope: MaintenanceScope,
    pub equipment_id: Option<Uuid>,
    pub equipment_name: Option<String>,
    pub work_center_id: Option<Uuid>,
    pub team_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub technician_name: Option<String>,
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

impl From<MaintenanceRequestWithNames> for MaintenanceRequestResponseDto {
    fn from(row: MaintenanceRequestWithNames) -> Self {
        let mut dto: Self = row.request.into();
        dto.equipment_name = row.equipment_name;
        dto.technician_name = row.technician_name;
        dto
    }
}

impl From<MaintenanceRequest> for MaintenanceRequestResponseDto {
    fn from(r: MaintenanceRequest) -> Self {
        Self {
            id: r.id,
            company_id: r.company_id,
            subject: r.subject,
            description: r.description,
            category: r.category,
            maintenance_scope: r.maintenance_scope,
            equipment_id: r.equipment_id,
            equipment_name: None,
            work_center_id: r.work_center_id,
            team_id: r.team_id,
            technician_id: r.technician_id,
            technician_name: None,
            kind: r.kind,
            stage: r.stage,
            priority: r.priority,
            request_date: r.request_date,
            scheduled_date: r.scheduled_date,
            duration: r.duration,
            created_by: r.created_by,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// DTO for the new-request form
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceRequestDto {
    #[validate(length(min = 1, max = 300))]
    pub subject: String,

    pub description: Option<String>,
    pub category: Option<String>,
    pub maintenance_scope: MaintenanceScope,
    pub equipment_id: Option<Uuid>,
    pub work_center_id: Option<Uuid>,
    pub team_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub kind: MaintenanceKind,

    #[serde(default)]
    pub priority: i32,

    /// Defaults to today when absent
    pub request_date: Option<NaiveDate>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub duration: Option<f64>,
}

/// Sparse update DTO for the lifecycle engine.
///
/// Numeric and date fields arrive as loose JSON (string, number or null) and
/// are coerced in [`Self::normalize`]; empty or malformed input silently
/// clears the column instead of erroring.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateMaintenanceRequestDto {
    pub subject: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,

    pub stage: Option<MaintenanceStage>,
    pub kind: Option<MaintenanceKind>,
    pub maintenance_scope: Option<MaintenanceScope>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub priority: Option<Option<Value>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub duration: Option<Option<Value>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub equipment_id: Option<Option<Uuid>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub work_center_id: Option<Option<Uuid>>,

    pub team_id: Option<Uuid>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub technician_id: Option<Option<Uuid>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub request_date: Option<Option<Value>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub scheduled_date: Option<Option<Value>>,
}

impl UpdateMaintenanceRequestDto {
    /// Normalize the loose wire format into a typed patch
    pub fn normalize(self) -> RequestPatch {
        RequestPatch {
            subject: self.subject,
            description: self.description,
            category: self.category,
            stage: self.stage,
            kind: self.kind,
            maintenance_scope: self.maintenance_scope,
            priority: self
                .priority
                .map(|v| v.as_ref().and_then(coerce_int)),
            duration: self
                .duration
                .map(|v| v.as_ref().and_then(coerce_float)),
            equipment_id: self.equipment_id,
            work_center_id: self.work_center_id,
            team_id: self.team_id,
            technician_id: self.technician_id,
            request_date: self
                .request_date
                .map(|v| v.as_ref().and_then(coerce_date)),
            scheduled_date: self
                .scheduled_date
                .map(|v| v.as_ref().and_then(coerce_datetime)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_coerces_string_numbers() {
        let dto: UpdateMaintenanceRequestDto = serde_json::from_value(json!({
            "priority": "2",
            "duration": "3.5"
        }))
        .unwrap();

        let patch = dto.normalize();
        assert_eq!(patch.priority, Some(Some(2)));
        assert_eq!(patch.duration, Some(Some(3.5)));
    }

    #[test]
    fn test_normalize_empty_string_clears_field() {
        let dto: UpdateMaintenanceRequestDto = serde_json::from_value(json!({
            "duration": "",
            "scheduled_date": ""
        }))
        .unwrap();

        let patch = dto.normalize();
        assert_eq!(patch.duration, Some(None));
        assert_eq!(patch.scheduled_date, Some(None));
    }

    #[test]
    fn test_normalize_absent_fields_left_untouched() {
        let dto: UpdateMaintenanceRequestDto = serde_json::from_value(json!({
            "stage": "in_progress"
        }))
        .unwrap();

        let patch = dto.normalize();
        assert_eq!(patch.stage, Some(MaintenanceStage::InProgress));
        assert!(patch.priority.is_none());
        assert!(patch.duration.is_none());
        assert!(patch.subject.is_none());
    }

    #[test]
    fn test_normalize_request_date_drops_time() {
        let dto: UpdateMaintenanceRequestDto = serde_json::from_value(json!({
            "request_date": "2024-11-03T09:15:00Z",
            "scheduled_date": "2024-11-05T09:15:00Z"
        }))
        .unwrap();

        let patch = dto.normalize();
        assert_eq!(
            patch.request_date,
            Some(NaiveDate::from_ymd_opt(2024, 11, 3))
        );
        let scheduled = patch.scheduled_date.unwrap().unwrap();
        assert_eq!(scheduled.to_rfc3339(), "2024-11-05T09:15:00+00:00");
    }

    #[test]
    fn test_normalize_invalid_numeric_defaults_to_null() {
        let dto: UpdateMaintenanceRequestDto = serde_json::from_value(json!({
            "priority": "urgent"
        }))
        .unwrap();

        // Silent coercion, not a rejection
        assert_eq!(dto.normalize().priority, Some(None));
    }
}
