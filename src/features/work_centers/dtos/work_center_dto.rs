use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::work_centers::models::WorkCenter;
use crate::shared::patch::double_option;

/// Response DTO for work center
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkCenterResponseDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub code: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub cost_per_hour: Option<Decimal>,
    pub capacity: Option<f64>,
    pub time_efficiency: Option<f64>,
    pub oee_target: Option<f64>,
    pub alternative_work_center_id: Option<Uuid>,
}

impl From<WorkCenter> for WorkCenterResponseDto {
    fn from(w: WorkCenter) -> Self {
        Self {
            id: w.id,
            company_id: w.company_id,
            name: w.name,
            code: w.code,
            cost_per_hour: w.cost_per_hour,
            capacity: w.capacity,
            time_efficiency: w.time_efficiency,
            oee_target: w.oee_target,
            alternative_work_center_id: w.alternative_work_center_id,
        }
    }
}

/// DTO for creating a work center
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateWorkCenterDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub code: Option<String>,

    #[schema(value_type = Option<f64>)]
    pub cost_per_hour: Option<Decimal>,

    pub capacity: Option<f64>,
    pub time_efficiency: Option<f64>,
    pub oee_target: Option<f64>,
    pub alternative_work_center_id: Option<Uuid>,
}

/// Sparse update DTO. Nullable fields use the double-option wrapper so an
/// explicit null clears the column.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateWorkCenterDto {
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub code: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub cost_per_hour: Option<Option<Decimal>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub capacity: Option<Option<f64>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub time_efficiency: Option<Option<f64>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub oee_target: Option<Option<f64>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub alternative_work_center_id: Option<Option<Uuid>>,
}
