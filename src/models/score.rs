//! Score data: raw pairs from the parser and the validated Score.

use crate::models::game::Side;
use serde::{Deserialize, Serialize};

/// One `a/b` token as read from a score string, before any format rules apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    pub team_1: u32,
    pub team_2: u32,
}

impl ScorePair {
    pub fn new(team_1: u32, team_2: u32) -> Self {
        Self { team_1, team_2 }
    }

    pub fn max(&self) -> u32 {
        self.team_1.max(self.team_2)
    }

    pub fn min(&self) -> u32 {
        self.team_1.min(self.team_2)
    }

    /// Side with the higher count; `None` when level.
    pub fn leader(&self) -> Option<Side> {
        match self.team_1.cmp(&self.team_2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl std::fmt::Display for ScorePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.team_1, self.team_2)
    }
}

/// Games won by each team in one set.
pub type SetScore = ScorePair;

/// Points won by each team in a super tie-break.
pub type SuperTiebreak = ScorePair;

/// A score that passed format validation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub sets: Vec<SetScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_tiebreak: Option<SuperTiebreak>,
}

impl Score {
    /// Sets won by team 1 and team 2.
    pub fn set_wins(&self) -> (usize, usize) {
        self.sets
            .iter()
            .fold((0, 0), |(one, two), set| match set.leader() {
                Some(Side::One) => (one + 1, two),
                Some(Side::Two) => (one, two + 1),
                None => (one, two),
            })
    }
}

/// Canonical form: sets then tie-break, space separated, e.g. `6/3 4/6 10/8`.
impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for pair in self.sets.iter().chain(self.super_tiebreak.iter()) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{pair}")?;
            first = false;
        }
        Ok(())
    }
}
