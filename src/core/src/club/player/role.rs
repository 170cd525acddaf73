use crate::club::player::PlayerBuildError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    #[serde(rename = "Wicket-keeper")]
    WicketKeeper,
}

impl PlayerRole {
    pub fn all() -> [PlayerRole; 4] {
        [
            PlayerRole::Batsman,
            PlayerRole::Bowler,
            PlayerRole::AllRounder,
            PlayerRole::WicketKeeper,
        ]
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-rounder",
            PlayerRole::WicketKeeper => "Wicket-keeper",
        }
    }

    pub fn is_wicket_keeper(&self) -> bool {
        *self == PlayerRole::WicketKeeper
    }
}

impl FromStr for PlayerRole {
    type Err = PlayerBuildError;

    /// Accepts the canonical names case-insensitively; `_` and spaces stand in for `-`.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "batsman" => Ok(PlayerRole::Batsman),
            "bowler" => Ok(PlayerRole::Bowler),
            "all-rounder" => Ok(PlayerRole::AllRounder),
            "wicket-keeper" => Ok(PlayerRole::WicketKeeper),
            _ => Err(PlayerBuildError::UnknownRole(value.to_string())),
        }
    }
}

impl Display for PlayerRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for role in PlayerRole::all() {
            assert_eq!(role.get_name().parse::<PlayerRole>(), Ok(role));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!("wicket_keeper".parse::<PlayerRole>(), Ok(PlayerRole::WicketKeeper));
        assert_eq!(" ALL ROUNDER ".parse::<PlayerRole>(), Ok(PlayerRole::AllRounder));
        assert_eq!("bowler".parse::<PlayerRole>(), Ok(PlayerRole::Bowler));
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert_eq!(
            "Umpire".parse::<PlayerRole>(),
            Err(PlayerBuildError::UnknownRole("Umpire".to_string()))
        );
    }

    #[test]
    fn test_only_wicket_keeper_is_keeper() {
        let keepers: Vec<PlayerRole> = PlayerRole::all()
            .into_iter()
            .filter(|r| r.is_wicket_keeper())
            .collect();

        assert_eq!(keepers, vec![PlayerRole::WicketKeeper]);
    }

    #[test]
    fn test_serializes_with_display_names() {
        let json = serde_json::to_string(&PlayerRole::AllRounder).unwrap();
        assert_eq!(json, "\"All-rounder\"");
    }
}
