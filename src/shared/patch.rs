use serde::{Deserialize, Deserializer};

/// Deserializer for sparse-patch fields where "absent", "null" and "value"
/// all mean different things. Wrap the field as `Option<Option<T>>` with
/// `#[serde(default, deserialize_with = "double_option")]`: absent stays
/// `None`, an explicit JSON null becomes `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "double_option")]
        value: Option<Option<i64>>,
    }

    #[test]
    fn test_absent_field_stays_none() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.value, None);
    }

    #[test]
    fn test_null_field_becomes_some_none() {
        let probe: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(probe.value, Some(None));
    }

    #[test]
    fn test_value_is_preserved() {
        let probe: Probe = serde_json::from_str(r#"{"value": 3}"#).unwrap();
        assert_eq!(probe.value, Some(Some(3)));
    }
}
