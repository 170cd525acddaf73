use crate::club::player::builder::PlayerBuilder;
use crate::club::{PlayerRole, PlayerSkills};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Stable identity of a player, unique across every roster of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    role: PlayerRole,
    skills: PlayerSkills,
    experience: f32,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub(crate) fn from_parts(
        id: PlayerId,
        name: String,
        role: PlayerRole,
        skills: PlayerSkills,
        experience: f32,
    ) -> Self {
        Player {
            id,
            name,
            role,
            skills,
            experience,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    pub fn skills(&self) -> &PlayerSkills {
        &self.skills
    }

    pub fn experience(&self) -> f32 {
        self.experience
    }

    pub fn is_wicket_keeper(&self) -> bool {
        self.role.is_wicket_keeper()
    }
}

//DISPLAY
impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}
