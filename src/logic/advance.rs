//! Knockout advancement: pair a completed round's winners into the next round.

use crate::logic::outcome::match_winner;
use crate::models::{BracketError, GameMatch, RoundOrder, RoundType, TeamRef};

/// Build the next round's matches from a completed knockout round.
///
/// `matches` is the bracket's match list; only matches of `round` and of the
/// round after it are looked at. Winners are paired in `match_order`: winner
/// of match 1 meets winner of match 2 in next-round match 1, and so on.
///
/// The "next round is still empty" check only guards against repeated calls
/// on the same snapshot; concurrent callers need a storage-level constraint.
pub fn advance_round(
    order: &RoundOrder,
    round: RoundType,
    matches: &[GameMatch],
) -> Result<Vec<GameMatch>, BracketError> {
    if !round.is_knockout() {
        return Err(BracketError::NotAKnockoutRound { round });
    }
    let next = order.next(round).ok_or(BracketError::NoNextRound { round })?;

    let mut current: Vec<&GameMatch> = matches.iter().filter(|m| m.round == round).collect();
    if current.is_empty() {
        return Err(BracketError::EmptyRound { round });
    }
    if matches.iter().any(|m| m.round == next) {
        return Err(BracketError::NextRoundAlreadyExists { round });
    }
    current.sort_by_key(|m| m.match_order);

    let winners = round_winners(round, &current)?;
    if winners.len() % 2 != 0 {
        return Err(BracketError::AdvancementParity {
            round,
            winners: winners.len(),
        });
    }

    let round_number = current.iter().find_map(|m| m.round_number).map(|n| n + 1);
    let next_matches: Vec<GameMatch> = winners
        .chunks_exact(2)
        .zip(1u32..)
        .map(|(pair, match_order)| {
            let mut m = GameMatch::new(pair[0].clone(), pair[1].clone(), next, match_order);
            m.round_number = round_number;
            m
        })
        .collect();

    log::debug!(
        "advanced {} winners from {} to {} ({} matches)",
        winners.len(),
        round,
        next,
        next_matches.len()
    );
    Ok(next_matches)
}

/// Winners of a sorted round, failing on the first undecided match.
fn round_winners(round: RoundType, current: &[&GameMatch]) -> Result<Vec<TeamRef>, BracketError> {
    current
        .iter()
        .map(|m| {
            match_winner(m)
                .cloned()
                .ok_or(BracketError::RoundIncomplete {
                    round,
                    match_order: m.match_order,
                })
        })
        .collect()
}

/// The two semi-final losers, in match order, for a third-place match.
/// `None` unless exactly two decided, non-bye semi-finals are present.
pub fn third_place_pairing(matches: &[GameMatch]) -> Option<(TeamRef, TeamRef)> {
    let mut semis: Vec<&GameMatch> = matches
        .iter()
        .filter(|m| m.round == RoundType::Semis)
        .collect();
    if semis.len() != 2 {
        return None;
    }
    semis.sort_by_key(|m| m.match_order);
    let loser = |m: &GameMatch| m.loser_ref().filter(|_| m.is_decided()).cloned();
    Some((loser(semis[0])?, loser(semis[1])?))
}
