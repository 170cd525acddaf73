use crate::club::{Player, PlayerId};
use serde::Serialize;
use std::collections::HashSet;

/// One side's ordered list of players.
#[derive(Debug, Clone, Serialize)]
pub struct Roster {
    name: String,
    players: Vec<Player>,
}

impl Roster {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Self {
        Roster {
            name: name.into(),
            players,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id() == player_id)
    }

    pub fn wicket_keepers(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_wicket_keeper()).collect()
    }

    /// Number of distinct players of `squad` that belong to this roster, matched by id.
    pub fn count_selected(&self, squad: &[Player]) -> usize {
        let ids: HashSet<PlayerId> = self.players.iter().map(|p| p.id()).collect();

        squad
            .iter()
            .map(|p| p.id())
            .filter(|id| ids.contains(id))
            .collect::<HashSet<PlayerId>>()
            .len()
    }
}
