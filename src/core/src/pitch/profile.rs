use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pitch type: {0}")]
pub struct UnknownPitchType(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchType {
    Green,
    FlatTrack,
    Dry,
    Wet,
    Dusty,
    Dead,
    Hybrid,
}

impl PitchType {
    pub fn all() -> [PitchType; 7] {
        [
            PitchType::Green,
            PitchType::FlatTrack,
            PitchType::Dry,
            PitchType::Wet,
            PitchType::Dusty,
            PitchType::Dead,
            PitchType::Hybrid,
        ]
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            PitchType::Green => "green",
            PitchType::FlatTrack => "flat_track",
            PitchType::Dry => "dry",
            PitchType::Wet => "wet",
            PitchType::Dusty => "dusty",
            PitchType::Dead => "dead",
            PitchType::Hybrid => "hybrid",
        }
    }
}

impl FromStr for PitchType {
    type Err = UnknownPitchType;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");

        PitchType::all()
            .into_iter()
            .find(|t| t.get_name() == normalized)
            .ok_or_else(|| UnknownPitchType(value.to_string()))
    }
}

impl Display for PitchType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionLevel {
    Low,
    Medium,
    High,
}

impl Display for ConditionLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ConditionLevel::Low => write!(f, "low"),
            ConditionLevel::Medium => write!(f, "medium"),
            ConditionLevel::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bounce {
    Low,
    Consistent,
    Variable,
    Unpredictable,
}

impl Display for Bounce {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Bounce::Low => write!(f, "low"),
            Bounce::Consistent => write!(f, "consistent"),
            Bounce::Variable => write!(f, "variable"),
            Bounce::Unpredictable => write!(f, "unpredictable"),
        }
    }
}

/// Reference characteristics of a pitch archetype.
///
/// Lookup data only: the pitch analysis works from the match report flags
/// and does not consult this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PitchProfile {
    pub pitch_type: PitchType,
    pub moisture: ConditionLevel,
    pub grass_cover: ConditionLevel,
    pub bounce: Bounce,
    pub turn: ConditionLevel,
}

impl PitchProfile {
    pub const fn of(pitch_type: PitchType) -> Self {
        use Bounce as B;
        use ConditionLevel::*;

        let (moisture, grass_cover, bounce, turn) = match pitch_type {
            PitchType::Green => (High, High, B::Variable, Low),
            PitchType::FlatTrack => (Low, Low, B::Consistent, Low),
            PitchType::Dry => (Low, Low, B::Low, High),
            PitchType::Wet => (High, Medium, B::Unpredictable, Low),
            PitchType::Dusty => (Low, Low, B::Low, High),
            PitchType::Dead => (Low, Low, B::Low, Low),
            PitchType::Hybrid => (Medium, Medium, B::Consistent, Medium),
        };

        PitchProfile {
            pitch_type,
            moisture,
            grass_cover,
            bounce,
            turn,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        name.parse::<PitchType>().ok().map(PitchProfile::of)
    }

    pub fn all() -> Vec<Self> {
        PitchType::all().into_iter().map(PitchProfile::of).collect()
    }
}

impl Display for PitchProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: moisture {}, grass cover {}, bounce {}, turn {}",
            self.pitch_type, self.moisture, self.grass_cover, self.bounce, self.turn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_every_archetype_once() {
        let profiles = PitchProfile::all();
        assert_eq!(profiles.len(), 7);

        for pitch_type in PitchType::all() {
            assert_eq!(
                profiles.iter().filter(|p| p.pitch_type == pitch_type).count(),
                1
            );
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let wet = PitchProfile::by_name("wet").unwrap();
        assert_eq!(wet.moisture, ConditionLevel::High);
        assert_eq!(wet.grass_cover, ConditionLevel::Medium);
        assert_eq!(wet.bounce, Bounce::Unpredictable);
        assert_eq!(wet.turn, ConditionLevel::Low);

        let flat = PitchProfile::by_name("Flat Track").unwrap();
        assert_eq!(flat.pitch_type, PitchType::FlatTrack);
        assert_eq!(flat.bounce, Bounce::Consistent);
    }

    #[test]
    fn test_spinning_tracks_turn_sharply() {
        for name in ["dry", "dusty"] {
            assert_eq!(PitchProfile::by_name(name).unwrap().turn, ConditionLevel::High);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(PitchProfile::by_name("concrete"), None);
        assert_eq!(
            "concrete".parse::<PitchType>(),
            Err(UnknownPitchType("concrete".to_string()))
        );
    }

    #[test]
    fn test_display_profile() {
        let hybrid = PitchProfile::of(PitchType::Hybrid);
        assert_eq!(
            hybrid.to_string(),
            "hybrid: moisture medium, grass cover medium, bounce consistent, turn medium"
        );
    }
}
