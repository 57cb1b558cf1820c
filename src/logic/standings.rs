//! Pool standings, re-derived from the pool's matches on every call.
//!
//! Ranking is win count descending, then team name ascending, then team id.
//! This is a simplified rule: there is no games differential or head-to-head
//! tiebreak, so equal win counts fall back to alphabetical order.

use crate::logic::outcome::match_winner;
use crate::models::{GameMatch, PoolId, TeamId, TeamRef};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One row of a pool table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoolStanding {
    pub team: TeamRef,
    pub win_count: u32,
}

/// Rank the teams appearing in one pool's matches.
///
/// Every team on either side of any match is listed (the empty side of a bye
/// is skipped); completed matches with a winner and byes add a win.
pub fn pool_standings(matches: &[GameMatch]) -> Vec<PoolStanding> {
    let mut table: HashMap<TeamId, PoolStanding> = HashMap::new();

    for m in matches {
        for team in [&m.team_1, &m.team_2].into_iter().flatten() {
            table.entry(team.id).or_insert_with(|| PoolStanding {
                team: team.clone(),
                win_count: 0,
            });
        }
    }

    for m in matches {
        if let Some(row) = match_winner(m).and_then(|w| table.get_mut(&w.id)) {
            row.win_count += 1;
        }
    }

    let mut standings: Vec<PoolStanding> = table.into_values().collect();
    standings.sort_by(|a, b| {
        b.win_count
            .cmp(&a.win_count)
            .then_with(|| a.team.name.cmp(&b.team.name))
            .then_with(|| a.team.id.cmp(&b.team.id))
    });
    standings
}

/// Split a mixed match list by pool and rank each pool. Matches without a
/// pool id are ignored.
pub fn standings_by_pool(matches: &[GameMatch]) -> BTreeMap<PoolId, Vec<PoolStanding>> {
    let mut by_pool: BTreeMap<PoolId, Vec<GameMatch>> = BTreeMap::new();
    for m in matches {
        if let Some(pool_id) = m.pool_id {
            by_pool.entry(pool_id).or_default().push(m.clone());
        }
    }
    by_pool
        .into_iter()
        .map(|(pool_id, pool_matches)| (pool_id, pool_standings(&pool_matches)))
        .collect()
}

/// Top `per_pool` teams of each pool, rank-major: every pool winner (in
/// pool id order), then every runner-up, and so on.
pub fn pool_qualifiers(
    standings: &BTreeMap<PoolId, Vec<PoolStanding>>,
    per_pool: usize,
) -> Vec<TeamRef> {
    (0..per_pool)
        .flat_map(|rank| {
            standings
                .values()
                .filter_map(move |table| table.get(rank).map(|row| row.team.clone()))
        })
        .collect()
}
