//! Padel tournament engine: score parsing and validation, pool standings,
//! and knockout bracket progression. Pure functions over caller-supplied data.

pub mod logic;
pub mod models;

pub use logic::{
    advance_round, generate_knockout_round, match_winner, parse_score, plan_for_qualified,
    pool_qualifiers, pool_standings, record_score, resolve_bye, resolve_outcome, rules_for,
    standings_by_pool, submit_score, third_place_pairing, validate_score, FormatRules,
    KnockoutEntry, KnockoutPlan, KnockoutStart, PoolStanding, Resolution, ScoreOutcome,
};
pub use models::{
    BracketError, GameMatch, MatchFormat, MatchId, MatchStatus, PoolId, RoundOrder, RoundType,
    Score, ScoreError, ScorePair, Side, TeamId, TeamRef,
};
