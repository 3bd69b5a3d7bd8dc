use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

/// Risk level attached to a practice.
///
/// Source files occasionally carry values outside HIGH/MEDIUM/LOW; those are
/// kept verbatim as `Unrecognized` so detail views still show them, while the
/// risk-bucketed summaries leave them out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Risk {
    High,
    Medium,
    #[default]
    Low,
    Unrecognized(String),
}

impl Risk {
    /// The three recognized levels, in summary-table order.
    pub fn levels() -> [Risk; 3] {
        [Risk::High, Risk::Medium, Risk::Low]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Risk::High => "HIGH",
            Risk::Medium => "MEDIUM",
            Risk::Low => "LOW",
            Risk::Unrecognized(s) => s,
        }
    }
}

impl From<String> for Risk {
    fn from(s: String) -> Self {
        match s.as_str() {
            "HIGH" => Risk::High,
            "MEDIUM" => Risk::Medium,
            "LOW" => Risk::Low,
            _ => Risk::Unrecognized(s),
        }
    }
}

impl From<Risk> for String {
    fn from(r: Risk) -> Self {
        match r {
            Risk::Unrecognized(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Reads an explicit JSON `null` as the field's default, same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt: Option<T> = Option::deserialize(d)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_are_case_sensitive() {
        assert_eq!(Risk::from("HIGH".to_string()), Risk::High);
        assert_eq!(
            Risk::from("high".to_string()),
            Risk::Unrecognized("high".to_string())
        );
    }

    #[test]
    fn unrecognized_round_trips_verbatim() {
        let r: Risk = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert!(matches!(&r, Risk::Unrecognized(s) if s == "CRITICAL"));
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"CRITICAL\"");
    }

    #[test]
    fn null_risk_reads_as_low() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "null_as_default")]
            risk: Risk,
        }
        let row: Row = serde_json::from_str(r#"{"risk":null}"#).unwrap();
        assert_eq!(row.risk, Risk::Low);
    }
}
