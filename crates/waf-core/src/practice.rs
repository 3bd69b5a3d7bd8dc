use crate::types::{null_as_default, Risk};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Practice
// ---------------------------------------------------------------------------

/// A single best-practice record, as stored in pillar and lens source files.
///
/// Fields this crate does not interpret are kept in `extra` so that the JSON
/// detail view reproduces the source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practice {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk: Risk,
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub related_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Practice {
    #[cfg(test)]
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>, risk: Risk) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            risk,
            area: Vec::new(),
            pillar: None,
            lens: None,
            description: String::new(),
            outcome: None,
            related_ids: Vec::new(),
            href: None,
            extra: Map::new(),
        }
    }

    /// Outcome text, treating an empty string as absent.
    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref().filter(|s| !s.is_empty())
    }

    pub fn href_or_na(&self) -> &str {
        self.href.as_deref().unwrap_or("N/A")
    }

    /// The first `n` areas joined with ", ".
    pub fn leading_areas(&self, n: usize) -> String {
        self.area
            .iter()
            .take(n)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_risk_defaults_to_low() {
        let p: Practice =
            serde_json::from_str(r#"{"id":"SEC01-BP01","title":"Separate workloads"}"#).unwrap();
        assert_eq!(p.risk, Risk::Low);
        assert!(p.area.is_empty());
        assert_eq!(p.href_or_na(), "N/A");
    }

    #[test]
    fn camel_case_and_unknown_fields_survive() {
        let raw = r#"{
            "id": "REL01-BP01",
            "title": "Aware of quotas",
            "risk": "HIGH",
            "area": ["Foundations", "Quotas", "Limits"],
            "relatedIds": ["REL01-BP02"],
            "implementationGuidance": "Use Service Quotas"
        }"#;
        let p: Practice = serde_json::from_str(raw).unwrap();
        assert_eq!(p.related_ids, vec!["REL01-BP02"]);
        assert_eq!(p.leading_areas(2), "Foundations, Quotas");

        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["implementationGuidance"], "Use Service Quotas");
        assert_eq!(back["relatedIds"][0], "REL01-BP02");
    }

    #[test]
    fn null_fields_read_as_absent() {
        let raw = r#"[
            {"id":"SEC01-BP01","title":null,"risk":null,"area":null,"description":null,"relatedIds":null,"outcome":null,"href":null},
            {"id":"SEC02-BP01","title":"Use strong sign-in mechanisms","risk":"HIGH"}
        ]"#;
        let ps: Vec<Practice> = serde_json::from_str(raw).unwrap();
        assert_eq!(ps.len(), 2);
        let p = &ps[0];
        assert_eq!(p.title, "");
        assert_eq!(p.risk, Risk::Low);
        assert!(p.area.is_empty());
        assert!(p.related_ids.is_empty());
        assert_eq!(p.outcome(), None);
        assert_eq!(p.href_or_na(), "N/A");
        assert_eq!(ps[1].risk, Risk::High);
    }

    #[test]
    fn json_view_fills_defaults_for_absent_fields() {
        let p: Practice =
            serde_json::from_str(r#"{"id":"OPS01-BP01","notes":"kept"}"#).unwrap();
        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["risk"], "LOW");
        assert_eq!(back["title"], "");
        assert_eq!(back["area"], serde_json::json!([]));
        assert_eq!(back["notes"], "kept");
        assert!(back.get("relatedIds").is_none());
    }

    #[test]
    fn empty_outcome_is_absent() {
        let mut p = Practice::new("OPS01-BP01", "Evaluate customer needs", Risk::High);
        p.outcome = Some(String::new());
        assert_eq!(p.outcome(), None);
    }
}
