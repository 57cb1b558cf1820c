//! Errors returned by the scoring pipeline and bracket progression.

use crate::models::format::MatchFormat;
use crate::models::game::{MatchStatus, RoundType};
use thiserror::Error;

/// Errors from parsing, validating, resolving or recording a score.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ScoreError {
    /// Empty input or a token that is not `<digits>/<digits>` (or `-`).
    #[error("Invalid score token '{token}'")]
    Parse { token: String },

    #[error("Format {format} does not allow {count} score entries")]
    InvalidSetCount { format: MatchFormat, count: usize },

    #[error("Invalid set score {token} for format {format}")]
    InvalidSetScore { format: MatchFormat, token: String },

    #[error("Sets are split 1-1: a third set is required")]
    MissingThirdSet,

    #[error("A third set was entered but the first two sets already decided the match")]
    UnexpectedThirdSet,

    #[error("Sets are split 1-1: format {format} requires a super tie-break")]
    MissingSuperTiebreak { format: MatchFormat },

    #[error("Super tie-break {token} is only played on a 1-1 split (format {format})")]
    UnexpectedSuperTiebreak { format: MatchFormat, token: String },

    #[error("Invalid super tie-break {token}: needs at least 10 points and a 2-point margin")]
    InvalidSuperTiebreak { token: String },

    /// Set counts did not produce a strict winner. Unreachable after validation.
    #[error("Inconsistent score for format {format}: no side holds a majority")]
    InconsistentScore { format: MatchFormat },

    #[error("Bye matches are not scored")]
    ByeMatch,

    #[error("Match is {status:?} and cannot be scored")]
    NotScorable { status: MatchStatus },

    #[error("Match is missing a team")]
    MissingTeam,
}

impl ScoreError {
    /// Stable tag for API consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreError::Parse { .. } => "parse",
            ScoreError::InvalidSetCount { .. } => "invalid_set_count",
            ScoreError::InvalidSetScore { .. } => "invalid_set_score",
            ScoreError::MissingThirdSet => "missing_third_set",
            ScoreError::UnexpectedThirdSet => "unexpected_third_set",
            ScoreError::MissingSuperTiebreak { .. } => "missing_super_tiebreak",
            ScoreError::UnexpectedSuperTiebreak { .. } => "unexpected_super_tiebreak",
            ScoreError::InvalidSuperTiebreak { .. } => "invalid_super_tiebreak",
            ScoreError::InconsistentScore { .. } => "inconsistent_score",
            ScoreError::ByeMatch => "bye_match",
            ScoreError::NotScorable { .. } => "not_scorable",
            ScoreError::MissingTeam => "missing_team",
        }
    }
}

/// Errors from knockout generation and round advancement.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BracketError {
    #[error("Round {round} produced {winners} winners; cannot pair an odd count")]
    AdvancementParity { round: RoundType, winners: usize },

    #[error("Round {round} has no next round")]
    NoNextRound { round: RoundType },

    #[error("Round {round} is not a knockout round")]
    NotAKnockoutRound { round: RoundType },

    #[error("Round {round} has no matches")]
    EmptyRound { round: RoundType },

    #[error("Match {match_order} of round {round} has no result")]
    RoundIncomplete { round: RoundType, match_order: u32 },

    #[error("Matches for the round after {round} already exist")]
    NextRoundAlreadyExists { round: RoundType },
}

impl BracketError {
    /// Stable tag for API consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            BracketError::AdvancementParity { .. } => "advancement_parity",
            BracketError::NoNextRound { .. } => "no_next_round",
            BracketError::NotAKnockoutRound { .. } => "not_a_knockout_round",
            BracketError::EmptyRound { .. } => "empty_round",
            BracketError::RoundIncomplete { .. } => "round_incomplete",
            BracketError::NextRoundAlreadyExists { .. } => "next_round_already_exists",
        }
    }
}
