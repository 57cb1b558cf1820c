//! Round ordering table shared by knockout generation and advancement.

use crate::models::game::RoundType;
use serde::{Deserialize, Serialize};

/// Ordered progression of rounds. The third-place match is never part of it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOrder {
    rounds: Vec<RoundType>,
}

impl Default for RoundOrder {
    /// `pool → round_of_16 → quarters → semis → final`.
    fn default() -> Self {
        Self::new(vec![
            RoundType::Pool,
            RoundType::RoundOf16,
            RoundType::Quarters,
            RoundType::Semis,
            RoundType::Final,
        ])
    }
}

impl RoundOrder {
    pub fn new(rounds: Vec<RoundType>) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> &[RoundType] {
        &self.rounds
    }

    pub fn position(&self, round: RoundType) -> Option<usize> {
        self.rounds.iter().position(|r| *r == round)
    }

    /// Round that follows `round`, or `None` for the last round and for
    /// rounds outside the table.
    pub fn next(&self, round: RoundType) -> Option<RoundType> {
        self.position(round)
            .and_then(|i| self.rounds.get(i + 1))
            .copied()
    }

    /// Knockout rounds in progression order.
    pub fn knockout_rounds(&self) -> impl Iterator<Item = RoundType> + '_ {
        self.rounds.iter().copied().filter(|r| r.is_knockout())
    }
}
