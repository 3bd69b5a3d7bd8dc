use crate::types::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An indicator, anti-pattern or metric listed under a capability.
/// Only indicators carry a `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceItem {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A DevOps capability. One capability is stored per source file, and
/// `sagaCode.capabilityCode` identifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    #[serde(default, deserialize_with = "null_as_default")]
    pub saga: String,
    pub saga_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capability: String,
    pub capability_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indicators: Vec<GuidanceItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub anti_patterns: Vec<GuidanceItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: Vec<GuidanceItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Capability {
    pub fn code(&self) -> String {
        format!("{}.{}", self.saga_code, self.capability_code)
    }

    pub fn href_or_na(&self) -> &str {
        self.href.as_deref().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_capability_file() {
        let raw = r#"{
            "saga": "Development Lifecycle",
            "sagaCode": "DL",
            "capability": "Continuous Integration",
            "capabilityCode": "CI",
            "description": "Merge often.",
            "indicators": [{"id": "DL.CI.1", "title": "Commit daily", "category": "Foundational"}],
            "antiPatterns": [{"id": "DL.CI.AP1", "title": "Long-lived branches"}]
        }"#;
        let cap: Capability = serde_json::from_str(raw).unwrap();
        assert_eq!(cap.code(), "DL.CI");
        assert_eq!(cap.indicators[0].category.as_deref(), Some("Foundational"));
        assert_eq!(cap.anti_patterns.len(), 1);
        assert!(cap.metrics.is_empty());
        assert_eq!(cap.href_or_na(), "N/A");
    }

    #[test]
    fn null_lists_read_as_empty() {
        let raw = r#"{
            "saga": null,
            "sagaCode": "OB",
            "capability": "Telemetry",
            "capabilityCode": "TEL",
            "description": null,
            "indicators": [{"id": "OB.TEL.1", "title": null}],
            "antiPatterns": null,
            "metrics": null
        }"#;
        let cap: Capability = serde_json::from_str(raw).unwrap();
        assert_eq!(cap.code(), "OB.TEL");
        assert_eq!(cap.saga, "");
        assert_eq!(cap.indicators[0].title, "");
        assert!(cap.anti_patterns.is_empty());
        assert!(cap.metrics.is_empty());
    }
}
