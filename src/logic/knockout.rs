//! Knockout stage start: which round the bracket opens at and how many slots it needs.
//!
//! Pairing qualifiers into those slots is left to the seeding caller.

use crate::models::{GameMatch, RoundOrder, RoundType};
use serde::{Deserialize, Serialize};

/// Teams each pool sends to the knockout stage.
pub const QUALIFIERS_PER_POOL: usize = 2;

/// Where the knockout stage comes from.
#[derive(Clone, Copy, Debug)]
pub enum KnockoutEntry<'a> {
    /// Bracket rounds are already materialized; nothing to generate.
    ExistingRounds(&'a [GameMatch]),
    /// Pools funnel their top two into one bracket.
    FromPools { pool_count: usize },
    /// A raw qualified-team count.
    Qualified(usize),
}

/// Opening round of a knockout stage.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutPlan {
    pub round: RoundType,
    pub qualified: usize,
    /// Match slots to create: half the round's capacity.
    pub slots: usize,
    /// Qualifiers beyond the round's capacity; the seeding caller decides
    /// who is left out.
    pub surplus: usize,
}

impl KnockoutPlan {
    /// Empty scheduled matches for the opening round, `match_order` 1..=slots.
    pub fn skeleton_matches(&self) -> Vec<GameMatch> {
        (1..=self.slots)
            .map(|order| GameMatch::slot(self.round, order as u32))
            .collect()
    }
}

/// Outcome of knockout generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum KnockoutStart {
    AlreadyMaterialized,
    NoKnockoutStage,
    Start(KnockoutPlan),
}

/// Decide how the knockout stage opens.
pub fn generate_knockout_round(order: &RoundOrder, entry: KnockoutEntry<'_>) -> KnockoutStart {
    match entry {
        KnockoutEntry::ExistingRounds(matches) => {
            if matches.iter().any(|m| m.round.is_knockout()) {
                KnockoutStart::AlreadyMaterialized
            } else {
                KnockoutStart::NoKnockoutStage
            }
        }
        KnockoutEntry::FromPools { pool_count } => {
            plan_for_qualified(order, pool_count * QUALIFIERS_PER_POOL)
        }
        KnockoutEntry::Qualified(count) => plan_for_qualified(order, count),
    }
}

/// First knockout round (in `order`) whose capacity fits within `qualified`:
/// 16+ opens at round_of_16, 8+ at quarters, 4+ at semis, 2+ at the final.
pub fn plan_for_qualified(order: &RoundOrder, qualified: usize) -> KnockoutStart {
    let round = order
        .knockout_rounds()
        .find_map(|r| r.capacity().filter(|cap| qualified >= *cap).map(|cap| (r, cap)));
    match round {
        Some((round, capacity)) => {
            log::debug!("{} qualified teams open the knockout stage at {}", qualified, round);
            KnockoutStart::Start(KnockoutPlan {
                round,
                qualified,
                slots: capacity / 2,
                surplus: qualified - capacity,
            })
        }
        None => KnockoutStart::NoKnockoutStage,
    }
}
