use crate::club::Player;
use crate::pitch::PitchAnalysis;
use crate::SelectionError;
use log::{debug, warn};
use rand::seq::{index, IndexedRandom};
use rand::Rng;

pub const DEFAULT_SQUAD_SIZE: usize = 11;

pub struct SquadSelector;

impl SquadSelector {
    /// Draws an eleven uniformly at random from `team1` followed by `team2`,
    /// then swaps in a wicket-keeper if the draw produced none.
    ///
    /// `_analysis` is accepted but does not influence the draw: pitch conditions
    /// are currently computed for reporting only.
    pub fn select<R: Rng + ?Sized>(
        team1: &[Player],
        team2: &[Player],
        _analysis: &PitchAnalysis,
        rng: &mut R,
    ) -> Result<Vec<Player>, SelectionError> {
        let candidates: Vec<&Player> = team1.iter().chain(team2.iter()).collect();

        if candidates.len() < DEFAULT_SQUAD_SIZE {
            warn!(
                "Not enough players for full squad: {}",
                candidates.len()
            );

            return Err(SelectionError::InsufficientPlayers {
                available: candidates.len(),
                required: DEFAULT_SQUAD_SIZE,
            });
        }

        debug!("Available players for selection: {}", candidates.len());

        let mut squad: Vec<&Player> = index::sample(rng, candidates.len(), DEFAULT_SQUAD_SIZE)
            .into_iter()
            .map(|idx| candidates[idx])
            .collect();

        Self::ensure_wicket_keeper(&mut squad, &candidates, rng);

        debug!(
            "Selected squad: {}",
            squad.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
        );

        Ok(squad.into_iter().cloned().collect())
    }

    /// Replaces a random non-keeper with a random keeper from the whole pool
    /// when the squad has no wicket-keeper. Leaves the squad untouched if the
    /// pool has no keeper at all.
    fn ensure_wicket_keeper<'p, R: Rng + ?Sized>(
        squad: &mut Vec<&'p Player>,
        candidates: &[&'p Player],
        rng: &mut R,
    ) {
        if squad.iter().any(|p| p.is_wicket_keeper()) {
            return;
        }

        let non_keepers: Vec<usize> = squad
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_wicket_keeper())
            .map(|(idx, _)| idx)
            .collect();

        let wicket_keepers: Vec<&'p Player> = candidates
            .iter()
            .filter(|p| p.is_wicket_keeper())
            .copied()
            .collect();

        if wicket_keepers.is_empty() {
            warn!("No wicket-keeper available in the pool, squad stays without one");
            return;
        }

        if let (Some(&dropped), Some(&keeper)) =
            (non_keepers.choose(rng), wicket_keepers.choose(rng))
        {
            let dropped = squad.remove(dropped);
            squad.push(keeper);

            debug!("Swapped {} for wicket-keeper {}", dropped.name(), keeper.name());
        }
    }
}
