use crate::club::{Player, PlayerId, PlayerRole, PlayerSkills};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerBuildError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("player name must not be empty")]
    EmptyName,

    #[error("unknown player role: {0}")]
    UnknownRole(String),
}

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<PlayerId>,
    name: Option<String>,
    role: Option<PlayerRole>,
    skills: Option<PlayerSkills>,
    experience: Option<f32>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: PlayerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn role(mut self, role: PlayerRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn experience(mut self, experience: f32) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn build(self) -> Result<Player, PlayerBuildError> {
        let name = self.name.ok_or(PlayerBuildError::MissingField("name"))?;
        if name.trim().is_empty() {
            return Err(PlayerBuildError::EmptyName);
        }

        Ok(Player::from_parts(
            self.id.ok_or(PlayerBuildError::MissingField("id"))?,
            name,
            self.role.ok_or(PlayerBuildError::MissingField("role"))?,
            self.skills.ok_or(PlayerBuildError::MissingField("skills"))?,
            self.experience.ok_or(PlayerBuildError::MissingField("experience"))?,
        ))
    }
}
