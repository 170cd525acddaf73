use crate::DatabaseError;
use cricket_core::{Player, PlayerId, PlayerRole, PlayerSkills, Roster};
use log::debug;
use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../../data/teams.json");

#[derive(Deserialize)]
pub struct RosterEntity {
    pub name: String,
    pub players: Vec<PlayerEntity>,
}

#[derive(Deserialize)]
pub struct PlayerEntity {
    pub name: String,
    pub role: String,
    pub batting_skill: f32,
    pub bowling_skill: f32,
    pub fielding_skill: f32,
    pub experience: f32,
}

pub struct RosterLoader;

impl RosterLoader {
    pub fn load() -> Result<Vec<Roster>, DatabaseError> {
        Self::from_json(STATIC_TEAMS_JSON)
    }

    /// Player ids are handed out from 1 in document order, across all rosters.
    pub fn from_json(json: &str) -> Result<Vec<Roster>, DatabaseError> {
        let entities: Vec<RosterEntity> = serde_json::from_str(json)?;

        let mut next_id = 1u32;
        let mut rosters = Vec::with_capacity(entities.len());

        for entity in entities {
            let mut players = Vec::with_capacity(entity.players.len());

            for player in entity.players {
                players.push(Self::build_player(&entity.name, PlayerId(next_id), player)?);
                next_id += 1;
            }

            debug!("roster loaded: {}, {} players", entity.name, players.len());

            rosters.push(Roster::new(entity.name, players));
        }

        Ok(rosters)
    }

    fn build_player(
        roster: &str,
        id: PlayerId,
        entity: PlayerEntity,
    ) -> Result<Player, DatabaseError> {
        let invalid = |source| DatabaseError::InvalidPlayer {
            roster: roster.to_string(),
            name: entity.name.clone(),
            source,
        };

        let role = entity.role.parse::<PlayerRole>().map_err(invalid)?;

        Player::builder()
            .id(id)
            .name(entity.name.clone())
            .role(role)
            .skills(PlayerSkills::new(
                entity.batting_skill,
                entity.bowling_skill,
                entity.fielding_skill,
            ))
            .experience(entity.experience)
            .build()
            .map_err(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::PlayerBuildError;
    use std::collections::HashSet;

    #[test]
    fn test_load_demo_rosters() {
        let rosters = RosterLoader::load().unwrap();

        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].name(), "Sri Lanka");
        assert_eq!(rosters[1].name(), "India");
        assert!(rosters.iter().all(|r| r.len() == 11));
        assert!(rosters.iter().all(|r| r.wicket_keepers().len() == 1));
    }

    #[test]
    fn test_ids_are_unique_across_rosters() {
        let rosters = RosterLoader::load().unwrap();

        let ids: HashSet<PlayerId> = rosters
            .iter()
            .flat_map(|r| r.players())
            .map(|p| p.id())
            .collect();

        assert_eq!(ids.len(), 22);
        assert_eq!(rosters[1].players()[0].id(), PlayerId(12));
    }

    #[test]
    fn test_unknown_role_is_reported_with_context() {
        let json = r#"[{ "name": "XI", "players": [
            { "name": "Dickie Bird", "role": "Umpire", "batting_skill": 1,
              "bowling_skill": 1, "fielding_skill": 1, "experience": 99 }
        ]}]"#;

        match RosterLoader::from_json(json) {
            Err(DatabaseError::InvalidPlayer { roster, name, source }) => {
                assert_eq!(roster, "XI");
                assert_eq!(name, "Dickie Bird");
                assert_eq!(source, PlayerBuildError::UnknownRole("Umpire".to_string()));
            }
            other => panic!("unexpected result: {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            RosterLoader::from_json("[{ \"name\": 1 }]"),
            Err(DatabaseError::Json(_))
        ));
    }
}
