use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const BATTING_FIRST_ADVANTAGE: &str = "batting_first_advantage";
const DEW_FACTOR: &str = "dew_factor";
const SUPPORTS_SPIN: &str = "supports_spin";
const SUPPORTS_PACE: &str = "supports_pace";

/// Match-day description of the playing surface.
///
/// Every flag defaults to `false`. Deserialization never fails on shape:
/// a flag that is missing or not a boolean reads as `false`, unknown string
/// entries are kept as descriptive notes and anything else is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct PitchReport {
    pub batting_first_advantage: bool,
    pub dew_factor: bool,
    pub supports_spin: bool,
    pub supports_pace: bool,
    #[serde(flatten)]
    pub notes: BTreeMap<String, String>,
}

impl PitchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batting_first_advantage(mut self, value: bool) -> Self {
        self.batting_first_advantage = value;
        self
    }

    pub fn with_dew_factor(mut self, value: bool) -> Self {
        self.dew_factor = value;
        self
    }

    pub fn with_spin(mut self, value: bool) -> Self {
        self.supports_spin = value;
        self
    }

    pub fn with_pace(mut self, value: bool) -> Self {
        self.supports_pace = value;
        self
    }

    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes.insert(key.into(), value.into());
        self
    }

    pub fn note(&self, key: &str) -> Option<&str> {
        self.notes.get(key).map(String::as_str)
    }
}

impl From<BTreeMap<String, Value>> for PitchReport {
    fn from(mut entries: BTreeMap<String, Value>) -> Self {
        let mut flag = |key: &str| {
            entries
                .remove(key)
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        };

        let batting_first_advantage = flag(BATTING_FIRST_ADVANTAGE);
        let dew_factor = flag(DEW_FACTOR);
        let supports_spin = flag(SUPPORTS_SPIN);
        let supports_pace = flag(SUPPORTS_PACE);

        let notes = entries
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key, text)),
                _ => None,
            })
            .collect();

        PitchReport {
            batting_first_advantage,
            dew_factor,
            supports_spin,
            supports_pace,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_false() {
        let report: PitchReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report, PitchReport::default());
    }

    #[test]
    fn test_deserialize_flags_and_notes() {
        let report: PitchReport = serde_json::from_str(
            r#"{
                "batting_first_advantage": true,
                "supports_spin": true,
                "conditions": "varying",
                "overhead": "cloudy"
            }"#,
        )
        .unwrap();

        assert!(report.batting_first_advantage);
        assert!(report.supports_spin);
        assert!(!report.supports_pace);
        assert!(!report.dew_factor);
        assert_eq!(report.note("conditions"), Some("varying"));
        assert_eq!(report.note("overhead"), Some("cloudy"));
    }

    #[test]
    fn test_malformed_values_are_tolerated() {
        let report: PitchReport = serde_json::from_str(
            r#"{ "dew_factor": "yes", "supports_pace": 1, "rating": 7, "tags": ["a"] }"#,
        )
        .unwrap();

        assert!(!report.dew_factor);
        assert!(!report.supports_pace);
        assert!(report.notes.is_empty());
    }

    #[test]
    fn test_serialize_flattens_notes() {
        let report = PitchReport::new()
            .with_dew_factor(true)
            .with_note("conditions", "varying");

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["dew_factor"], true);
        assert_eq!(value["conditions"], "varying");

        let back: PitchReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }
}
