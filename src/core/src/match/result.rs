use crate::club::Player;
use crate::pitch::PitchAnalysis;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSelectionResult {
    pub pitch_analysis: PitchAnalysis,
    pub squad: Vec<Player>,
    pub captain: Player,
    pub vice_captain: Player,
    pub team1_players_selected: usize,
    pub team2_players_selected: usize,
}
