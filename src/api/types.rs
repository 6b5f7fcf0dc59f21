//! Data transfer types for the charts API.
//!
//! These are transient values built from response bodies and discarded
//! after use. The `data` payload is backend-defined and not validated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chart listing entry: identity and metadata without the payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartMeta {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

/// Full chart including its opaque payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Chart {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub data: Value,
}

/// Request body for creating a chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewChart {
    pub name: String,
    pub data: Value,
}

/// Request body for updating a chart. The name is optional and omitted
/// from the JSON when absent; the payload is always sent.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: Value,
}

/// Response body for a successful create: the backend-assigned id.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedChart {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chart_meta_deserializes() {
        let meta: ChartMeta =
            serde_json::from_str(r#"{"id": 1, "name": "flow", "created_at": "2024-01-01T00:00:00"}"#)
                .unwrap();
        assert_eq!(meta.id, 1);
        assert_eq!(meta.name, "flow");
        assert_eq!(meta.created_at, "2024-01-01T00:00:00");
    }

    #[test]
    fn test_chart_keeps_opaque_data() {
        let chart: Chart = serde_json::from_value(json!({
            "id": 2,
            "name": "flow",
            "created_at": "2024-01-01T00:00:00",
            "data": {"nodes": [{"x": 1}], "edges": []}
        }))
        .unwrap();
        assert_eq!(chart.data, json!({"nodes": [{"x": 1}], "edges": []}));
    }

    #[test]
    fn test_chart_update_omits_absent_name() {
        let update = ChartUpdate {
            name: None,
            data: json!({"nodes": []}),
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, json!({"data": {"nodes": []}}));
    }

    #[test]
    fn test_chart_update_includes_name_when_present() {
        let update = ChartUpdate {
            name: Some("renamed".to_string()),
            data: json!({}),
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, json!({"name": "renamed", "data": {}}));
    }

    #[test]
    fn test_new_chart_serializes_exact_body() {
        let chart = NewChart {
            name: "A".to_string(),
            data: json!({}),
        };
        let body = serde_json::to_value(&chart).unwrap();
        assert_eq!(body, json!({"name": "A", "data": {}}));
    }
}
