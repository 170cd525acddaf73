use crate::club::Player;
use crate::SelectionError;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

const LEADERSHIP_GROUP_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadershipAssignment {
    pub captain: Player,
    pub vice_captain: Player,
}

pub struct LeadershipPicker;

impl LeadershipPicker {
    /// Names the two most senior players of the squad captain and vice-captain.
    pub fn pick(squad: &[Player]) -> Result<LeadershipAssignment, SelectionError> {
        if squad.len() < LEADERSHIP_GROUP_SIZE {
            return Err(SelectionError::InsufficientSquadSize {
                available: squad.len(),
                required: LEADERSHIP_GROUP_SIZE,
            });
        }

        let ranked = Self::rank(squad);
        let captain = ranked[0];

        // a squad that repeats one player cannot supply a distinct deputy
        let vice_captain = ranked
            .iter()
            .skip(1)
            .find(|p| p.id() != captain.id())
            .ok_or(SelectionError::InsufficientSquadSize {
                available: 1,
                required: LEADERSHIP_GROUP_SIZE,
            })?;

        debug!("Captain: {}, vice captain: {}", captain.name(), vice_captain.name());

        Ok(LeadershipAssignment {
            captain: captain.clone(),
            vice_captain: (*vice_captain).clone(),
        })
    }

    /// Orders players by experience, then by total skill, both descending.
    /// Players with equal keys keep their squad order.
    pub fn rank(squad: &[Player]) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = squad.iter().collect();
        ranked.sort_by(|a, b| Self::compare(b, a));
        ranked
    }

    fn compare(a: &Player, b: &Player) -> Ordering {
        a.experience()
            .partial_cmp(&b.experience())
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                a.skills()
                    .total()
                    .partial_cmp(&b.skills().total())
                    .unwrap_or(Ordering::Equal)
            })
    }
}
