use crate::DatabaseError;
use cricket_core::PitchReport;
use std::fs;
use std::path::Path;

const STATIC_PITCH_REPORT_JSON: &str = include_str!("../../data/pitch_report.json");

pub struct PitchReportLoader;

impl PitchReportLoader {
    pub fn load() -> Result<PitchReport, DatabaseError> {
        Self::from_json(STATIC_PITCH_REPORT_JSON)
    }

    pub fn from_json(json: &str) -> Result<PitchReport, DatabaseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<PitchReport, DatabaseError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
