//! Players, teams, skills and per-player statistics

use serde::{Deserialize, Serialize};

use crate::core::types::{PlayerId, TeamId};

/// Player skills that change reach or sight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// +1 movement radius for every unit
    ForcedMarch,
    /// Sees into forests and reefs from any distance
    EagleEye,
}

/// Counters that leak information if shown to opponents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub damage: u32,
    pub destroyed_units: u32,
    pub lost_units: u32,
    pub captured: u32,
    pub created_units: u32,
}

/// A player taking part in the match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team: TeamId,
    pub skills: Vec<Skill>,
    pub stats: PlayerStatistics,
}

impl Player {
    pub fn new(id: PlayerId, team: TeamId) -> Self {
        Self {
            id,
            team,
            skills: Vec::new(),
            stats: PlayerStatistics::default(),
        }
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        if !self.skills.contains(&skill) {
            self.skills.push(skill);
        }
        self
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    /// Bonus added to every unit's movement radius
    pub fn movement_bonus(&self) -> i32 {
        if self.has_skill(Skill::ForcedMarch) {
            1
        } else {
            0
        }
    }
}
