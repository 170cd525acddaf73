use crate::club::Roster;
use crate::pitch::{PitchAnalyzer, PitchReport};
use crate::r#match::squad::{LeadershipPicker, SquadSelector};
use crate::r#match::MatchSelectionResult;
use crate::utils::Logging;
use crate::SelectionError;
use log::info;
use rand::Rng;

/// Pitch analysis, squad draw and leadership pick, in that order.
pub struct MatchSelection;

impl MatchSelection {
    pub fn run<R: Rng + ?Sized>(
        report: &PitchReport,
        team1: &Roster,
        team2: &Roster,
        rng: &mut R,
    ) -> Result<MatchSelectionResult, SelectionError> {
        let pitch_analysis = PitchAnalyzer::analyze(report);

        let message = format!("select squad: {} vs {}", team1.name(), team2.name());
        let squad = Logging::estimate_result(
            || SquadSelector::select(team1.players(), team2.players(), &pitch_analysis, rng),
            &message,
        )?;

        let leaders = LeadershipPicker::pick(&squad)?;

        let team1_players_selected = team1.count_selected(&squad);
        let team2_players_selected = team2.count_selected(&squad);

        info!(
            "selected squad: {} from {}, {} from {}, captain {}",
            team1_players_selected,
            team1.name(),
            team2_players_selected,
            team2.name(),
            leaders.captain.name()
        );

        Ok(MatchSelectionResult {
            pitch_analysis,
            squad,
            captain: leaders.captain,
            vice_captain: leaders.vice_captain,
            team1_players_selected,
            team2_players_selected,
        })
    }

    /// Runs with the calling thread's random generator.
    pub fn run_default(
        report: &PitchReport,
        team1: &Roster,
        team2: &Roster,
    ) -> Result<MatchSelectionResult, SelectionError> {
        Self::run(report, team1, team2, &mut rand::rng())
    }
}
