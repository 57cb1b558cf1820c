//! Scoring and bracket logic: parse, validate, resolve, standings, knockout.

mod advance;
mod knockout;
mod outcome;
mod parser;
mod rules;
mod standings;

pub use advance::{advance_round, third_place_pairing};
pub use knockout::{
    generate_knockout_round, plan_for_qualified, KnockoutEntry, KnockoutPlan, KnockoutStart,
    QUALIFIERS_PER_POOL,
};
pub use outcome::{
    match_winner, record_score, resolve_bye, resolve_outcome, submit_score, Resolution,
    ScoreOutcome,
};
pub use parser::parse_score;
pub use rules::{
    rules_for, validate_score, BestOfThreeSets, FormatRules, SetRule, SingleSet,
    TwoSetsSuperTiebreak, SUPER_TIEBREAK_POINTS,
};
pub use standings::{pool_qualifiers, pool_standings, standings_by_pool, PoolStanding};
