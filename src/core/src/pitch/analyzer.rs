use crate::pitch::PitchReport;
use log::debug;
use serde::Serialize;

/// Judgments derived from a [`PitchReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PitchAnalysis {
    pub favors_batting: bool,
    pub favors_bowling: bool,
    pub favors_spin: bool,
    pub favors_pace: bool,
    pub dew_factor: bool,
    pub unpredictable: bool,
}

pub struct PitchAnalyzer;

impl PitchAnalyzer {
    pub fn analyze(report: &PitchReport) -> PitchAnalysis {
        let analysis = PitchAnalysis {
            favors_batting: report.batting_first_advantage,
            favors_bowling: !report.batting_first_advantage,
            favors_spin: report.supports_spin,
            favors_pace: report.supports_pace,
            dew_factor: report.dew_factor,
            unpredictable: report.supports_spin && report.supports_pace,
        };

        debug!("pitch analysis: {:?}", analysis);

        analysis
    }
}
