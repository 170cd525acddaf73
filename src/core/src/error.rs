use thiserror::Error;

/// Precondition failures of the selection pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("not enough players to select a squad: {available} available, {required} required")]
    InsufficientPlayers { available: usize, required: usize },

    #[error(
        "not enough players to pick a captain and vice-captain: {available} available, {required} required"
    )]
    InsufficientSquadSize { available: usize, required: usize },
}
