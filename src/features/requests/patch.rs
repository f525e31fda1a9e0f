//! Sparse-patch normalization for maintenance request updates.
//!
//! Form-driven clients send numeric and date fields as strings, numbers or
//! empty values interchangeably. Coercion is deliberately forgiving: empty or
//! unparsable input becomes NULL instead of an error, and `priority` carries
//! no range check.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::features::requests::models::{MaintenanceKind, MaintenanceScope, MaintenanceStage};

/// Typed, normalized patch applied by the lifecycle engine. Outer `None`
/// leaves the column untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct RequestPatch {
    pub subject: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub stage: Option<MaintenanceStage>,
    pub kind: Option<MaintenanceKind>,
    pub maintenance_scope: Option<MaintenanceScope>,
    pub priority: Option<Option<i32>>,
    pub duration: Option<Option<f64>>,
    pub equipment_id: Option<Option<Uuid>>,
    pub work_center_id: Option<Option<Uuid>>,
    pub team_id: Option<Uuid>,
    pub technician_id: Option<Option<Uuid>>,
    pub request_date: Option<Option<NaiveDate>>,
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
}

/// Coerce a loose JSON value to an integer. Empty string, null, unparsable
/// and out-of-range input all collapse to None.
pub fn coerce_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(f64_to_i64))
            .and_then(|i| i32::try_from(i).ok()),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(f64_to_i64))
                .and_then(|i| i32::try_from(i).ok())
        }
        _ => None,
    }
}

fn f64_to_i64(f: f64) -> Option<i64> {
    let t = f.trunc();
    if t.is_finite() && t >= i64::MIN as f64 && t <= i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

/// Coerce a loose JSON value to a float, same forgiveness as [`coerce_int`]
pub fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Coerce to a calendar date, dropping any time component
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Coerce to a full timestamp. Bare dates become midnight UTC.
pub fn coerce_datetime(value: &Value) -> Option<DateTime<Utc>> {
    let s = value.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // datetime-local inputs omit the zone
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// The one embedded business rule of the lifecycle engine: moving a request
/// into the scrap stage flags its equipment. Returns the equipment to flag,
/// if any. Fires on every transition into scrap, even if the equipment is
/// already scrapped.
pub fn equipment_to_scrap(
    patch_stage: Option<MaintenanceStage>,
    equipment_id: Option<Uuid>,
) -> Option<Uuid> {
    match (patch_stage, equipment_id) {
        (Some(MaintenanceStage::Scrap), Some(id)) => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_int_from_number_and_string() {
        assert_eq!(coerce_int(&json!(3)), Some(3));
        assert_eq!(coerce_int(&json!("3")), Some(3));
        assert_eq!(coerce_int(&json!(2.9)), Some(2));
        assert_eq!(coerce_int(&json!("2.9")), Some(2));
        // No bounds check on priority-like values
        assert_eq!(coerce_int(&json!(-7)), Some(-7));
        assert_eq!(coerce_int(&json!(99)), Some(99));
    }

    #[test]
    fn test_coerce_int_invalid_becomes_none() {
        assert_eq!(coerce_int(&json!("")), None);
        assert_eq!(coerce_int(&json!("  ")), None);
        assert_eq!(coerce_int(&json!("abc")), None);
        assert_eq!(coerce_int(&json!(null)), None);
        assert_eq!(coerce_int(&json!(true)), None);
    }

    #[test]
    fn test_coerce_int_out_of_range_becomes_none() {
        let over = i64::from(i32::MAX) + 1;
        let under = i64::from(i32::MIN) - 1;

        assert_eq!(coerce_int(&json!(over)), None);
        assert_eq!(coerce_int(&json!(under)), None);
        assert_eq!(coerce_int(&json!(9999999999i64)), None);
        assert_eq!(coerce_int(&json!("9999999999")), None);
        assert_eq!(coerce_int(&json!(9999999999.5)), None);
        assert_eq!(coerce_int(&json!("1e20")), None);

        // Boundary values still pass through
        assert_eq!(coerce_int(&json!(i32::MAX)), Some(i32::MAX));
        assert_eq!(coerce_int(&json!(i32::MIN)), Some(i32::MIN));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_float(&json!(1.5)), Some(1.5));
        assert_eq!(coerce_float(&json!("1.5")), Some(1.5));
        assert_eq!(coerce_float(&json!("4")), Some(4.0));
        assert_eq!(coerce_float(&json!("")), None);
        assert_eq!(coerce_float(&json!("n/a")), None);
    }

    #[test]
    fn test_coerce_date_drops_time_component() {
        assert_eq!(
            coerce_date(&json!("2024-05-17")),
            NaiveDate::from_ymd_opt(2024, 5, 17)
        );
        assert_eq!(
            coerce_date(&json!("2024-05-17T14:30:00Z")),
            NaiveDate::from_ymd_opt(2024, 5, 17)
        );
        assert_eq!(coerce_date(&json!("")), None);
        assert_eq!(coerce_date(&json!("not-a-date")), None);
    }

    #[test]
    fn test_coerce_datetime_keeps_time_component() {
        let dt = coerce_datetime(&json!("2024-05-17T14:30:00Z")).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-05-17T14:30:00+00:00");

        let local = coerce_datetime(&json!("2024-05-17T14:30")).unwrap();
        assert_eq!(local.to_rfc3339(), "2024-05-17T14:30:00+00:00");

        let midnight = coerce_datetime(&json!("2024-05-17")).unwrap();
        assert_eq!(midnight.to_rfc3339(), "2024-05-17T00:00:00+00:00");

        assert_eq!(coerce_datetime(&json!("")), None);
    }

    #[test]
    fn test_equipment_to_scrap_requires_both() {
        let equipment = Uuid::new_v4();

        assert_eq!(
            equipment_to_scrap(Some(MaintenanceStage::Scrap), Some(equipment)),
            Some(equipment)
        );
        assert_eq!(equipment_to_scrap(Some(MaintenanceStage::Scrap), None), None);
        assert_eq!(
            equipment_to_scrap(Some(MaintenanceStage::Repaired), Some(equipment)),
            None
        );
        assert_eq!(equipment_to_scrap(None, Some(equipment)), None);
    }
}
