//! Match outcome: who won a validated score, and the full submission pipeline.

use crate::logic::parser::parse_score;
use crate::logic::rules::{rules_for, validate_score};
use crate::models::{GameMatch, MatchFormat, MatchStatus, Score, ScoreError, Side, TeamRef};
use serde::{Deserialize, Serialize};

/// Winner of a validated score.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub winner: Side,
    /// True iff the sets were level and the super tie-break decided the match.
    pub decided_by_super_tiebreak: bool,
}

/// Result of submitting a score string.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub score: Score,
    pub winner: Side,
    pub decided_by_super_tiebreak: bool,
}

/// Determine the winning side of a validated score.
///
/// Returns `InconsistentScore` when no side reaches the format's set count
/// with a strict lead. Validation rules out that case, so hitting it points
/// at a caller that skipped `validate_score`.
pub fn resolve_outcome(score: &Score, format: MatchFormat) -> Result<Resolution, ScoreError> {
    let (mut one, mut two) = score.set_wins();
    let level = one == two;

    let mut decided_by_super_tiebreak = false;
    if let Some(tb) = &score.super_tiebreak {
        match tb.leader() {
            Some(Side::One) => one += 1,
            Some(Side::Two) => two += 1,
            None => {}
        }
        decided_by_super_tiebreak = level;
    }

    let needed = rules_for(format).sets_to_win();
    let winner = if one >= needed && one > two {
        Side::One
    } else if two >= needed && two > one {
        Side::Two
    } else {
        log::debug!(
            "inconsistent {} score {}: set wins {}-{}",
            format,
            score,
            one,
            two
        );
        return Err(ScoreError::InconsistentScore { format });
    };

    Ok(Resolution {
        winner,
        decided_by_super_tiebreak,
    })
}

/// Parse, validate and resolve a raw score string.
pub fn submit_score(raw: &str, format: MatchFormat) -> Result<ScoreOutcome, ScoreError> {
    let pairs = parse_score(raw)?;
    let score = validate_score(&pairs, format)?;
    let resolution = resolve_outcome(&score, format)?;
    log::debug!(
        "accepted {} score '{}': winner {:?}, super tie-break {}",
        format,
        score,
        resolution.winner,
        resolution.decided_by_super_tiebreak
    );
    Ok(ScoreOutcome {
        score,
        winner: resolution.winner,
        decided_by_super_tiebreak: resolution.decided_by_super_tiebreak,
    })
}

/// Run the score pipeline for one match and mark it completed.
///
/// Bye matches, cancelled/forfeit matches and matches missing a side are
/// rejected. Scoring an already completed match overwrites its result.
pub fn record_score(
    game: &mut GameMatch,
    raw: &str,
    format: MatchFormat,
) -> Result<ScoreOutcome, ScoreError> {
    if game.is_bye {
        return Err(ScoreError::ByeMatch);
    }
    if game.status.is_terminal() {
        return Err(ScoreError::NotScorable {
            status: game.status,
        });
    }
    if game.team_1.is_none() || game.team_2.is_none() {
        return Err(ScoreError::MissingTeam);
    }

    let outcome = submit_score(raw, format)?;
    game.score = Some(outcome.score.clone());
    game.winner = Some(outcome.winner);
    game.status = MatchStatus::Completed;
    Ok(outcome)
}

/// The side that advances from a bye: whichever side is present.
pub fn resolve_bye(game: &GameMatch) -> Option<Side> {
    if !game.is_bye {
        return None;
    }
    match (&game.team_1, &game.team_2) {
        (Some(_), None) => Some(Side::One),
        (None, Some(_)) => Some(Side::Two),
        _ => None,
    }
}

/// The team that won a match: a bye's present side, otherwise the recorded
/// winner of a completed match.
pub fn match_winner(game: &GameMatch) -> Option<&TeamRef> {
    if game.is_bye {
        return resolve_bye(game).and_then(|side| game.team(side));
    }
    game.winner_ref().filter(|_| game.is_decided())
}
