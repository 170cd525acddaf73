use cricket_core::Roster;

const MAX_SUGGESTIONS: usize = 5;

/// Prefix lookup over player names, for completing names as they are typed.
pub struct PlayerNameIndex {
    names: Vec<String>,
}

impl PlayerNameIndex {
    pub fn new(rosters: &[Roster]) -> Self {
        PlayerNameIndex {
            names: rosters
                .iter()
                .flat_map(|r| r.players())
                .map(|p| p.name().to_string())
                .collect(),
        }
    }

    /// Case-insensitive prefix matches in roster order, at most five.
    pub fn autocomplete(&self, input: &str) -> Vec<&str> {
        let prefix = input.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }

        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RosterLoader;
    use cricket_core::{Player, PlayerId, PlayerRole, PlayerSkills};

    fn index() -> PlayerNameIndex {
        PlayerNameIndex::new(&RosterLoader::load().unwrap())
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        assert_eq!(index().autocomplete("kus"), vec!["Kusal Mendis"]);
        assert_eq!(index().autocomplete("  VIRAT "), vec!["Virat Kohli"]);
    }

    #[test]
    fn test_matches_keep_roster_order() {
        assert_eq!(
            index().autocomplete("s"),
            vec!["Sadeera Samarawickrama", "Shubman Gill", "Shreyas Iyer", "Shivam Dube"]
        );
    }

    #[test]
    fn test_suggestions_are_capped() {
        let players = (1..=7)
            .map(|id| {
                Player::builder()
                    .id(PlayerId(id))
                    .name(format!("Mendis {}", id))
                    .role(PlayerRole::Batsman)
                    .skills(PlayerSkills::default())
                    .experience(50.0)
                    .build()
                    .unwrap()
            })
            .collect();
        let index = PlayerNameIndex::new(&[Roster::new("Mendis XI", players)]);

        let suggestions = index.autocomplete("mendis");

        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "Mendis 1");
        assert_eq!(suggestions[4], "Mendis 5");
    }

    #[test]
    fn test_blank_input_suggests_nothing() {
        assert!(index().autocomplete("").is_empty());
        assert!(index().autocomplete("   ").is_empty());
        assert!(index().autocomplete("zz").is_empty());
    }
}
