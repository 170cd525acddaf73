use serde::{Deserialize, Serialize};

/// Batting, bowling and fielding ratings, conventionally on a 0..100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub batting: f32,
    pub bowling: f32,
    pub fielding: f32,
}

impl PlayerSkills {
    pub fn new(batting: f32, bowling: f32, fielding: f32) -> Self {
        PlayerSkills {
            batting,
            bowling,
            fielding,
        }
    }

    pub fn total(&self) -> f32 {
        self.batting + self.bowling + self.fielding
    }
}
