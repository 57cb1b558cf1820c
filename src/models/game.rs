//! Match, side, team reference, status and round type.

use crate::models::score::Score;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Identifier of a registered team (owned by the registration layer).
pub type TeamId = Uuid;

/// Identifier of a round-robin pool.
pub type PoolId = Uuid;

/// Which side of a match: team 1 or team 2.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// Opaque reference to a registered team. Only the id is compared; the name
/// is carried for deterministic ordering in standings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
    pub name: String,
}

impl TeamRef {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Lifecycle state of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Ready,
    InProgress,
    Completed,
    Cancelled,
    Forfeit,
}

impl MatchStatus {
    /// Cancelled and forfeit are set by the caller and never left again.
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchStatus::Cancelled | MatchStatus::Forfeit)
    }
}

/// Stage of the tournament a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    Pool,
    #[serde(rename = "round_of_16")]
    RoundOf16,
    Quarters,
    Semis,
    Final,
    ThirdPlace,
}

impl RoundType {
    /// Number of teams a knockout round holds; `None` for pool play and the
    /// third-place match, which are not part of the elimination ladder.
    pub fn capacity(self) -> Option<usize> {
        match self {
            RoundType::RoundOf16 => Some(16),
            RoundType::Quarters => Some(8),
            RoundType::Semis => Some(4),
            RoundType::Final => Some(2),
            RoundType::Pool | RoundType::ThirdPlace => None,
        }
    }

    pub fn is_knockout(self) -> bool {
        self.capacity().is_some()
    }
}

impl std::fmt::Display for RoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            RoundType::Pool => "pool",
            RoundType::RoundOf16 => "round_of_16",
            RoundType::Quarters => "quarters",
            RoundType::Semis => "semis",
            RoundType::Final => "final",
            RoundType::ThirdPlace => "third_place",
        };
        f.write_str(key)
    }
}

/// A single match between two teams, or a bye with only one side present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub round: RoundType,
    #[serde(default)]
    pub round_number: Option<u32>,
    /// 1-based position inside the round; drives knockout pairing.
    pub match_order: u32,
    #[serde(default)]
    pub pool_id: Option<PoolId>,
    pub team_1: Option<TeamRef>,
    pub team_2: Option<TeamRef>,
    #[serde(default)]
    pub is_bye: bool,
    #[serde(default)]
    pub status: MatchStatus,
    /// None if not yet played.
    #[serde(default)]
    pub winner: Option<Side>,
    #[serde(default)]
    pub score: Option<Score>,
}

impl GameMatch {
    pub fn new(team_1: TeamRef, team_2: TeamRef, round: RoundType, match_order: u32) -> Self {
        Self {
            team_1: Some(team_1),
            team_2: Some(team_2),
            ..Self::slot(round, match_order)
        }
    }

    /// An empty scheduled slot; sides are filled in by the seeding caller.
    pub fn slot(round: RoundType, match_order: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            round_number: None,
            match_order,
            pool_id: None,
            team_1: None,
            team_2: None,
            is_bye: false,
            status: MatchStatus::Scheduled,
            winner: None,
            score: None,
        }
    }

    /// A pool match between two teams.
    pub fn in_pool(pool_id: PoolId, team_1: TeamRef, team_2: TeamRef, match_order: u32) -> Self {
        Self {
            pool_id: Some(pool_id),
            ..Self::new(team_1, team_2, RoundType::Pool, match_order)
        }
    }

    /// A bye: the team advances without playing. Always completed, no score.
    pub fn bye(team: TeamRef, round: RoundType, match_order: u32) -> Self {
        Self {
            team_1: Some(team),
            is_bye: true,
            status: MatchStatus::Completed,
            winner: Some(Side::One),
            ..Self::slot(round, match_order)
        }
    }

    pub fn team(&self, side: Side) -> Option<&TeamRef> {
        match side {
            Side::One => self.team_1.as_ref(),
            Side::Two => self.team_2.as_ref(),
        }
    }

    /// The winning team, if the match has been decided.
    pub fn winner_ref(&self) -> Option<&TeamRef> {
        self.winner.and_then(|side| self.team(side))
    }

    /// The losing team of a decided, non-bye match.
    pub fn loser_ref(&self) -> Option<&TeamRef> {
        if self.is_bye {
            return None;
        }
        self.winner.and_then(|side| self.team(side.opponent()))
    }

    pub fn is_decided(&self) -> bool {
        self.status == MatchStatus::Completed && self.winner_ref().is_some()
    }
}
