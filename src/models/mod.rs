//! Data structures for padel tournaments: matches, scores, formats, rounds.

mod error;
mod format;
mod game;
mod round;
mod score;

pub use error::{BracketError, ScoreError};
pub use format::MatchFormat;
pub use game::{GameMatch, MatchId, MatchStatus, PoolId, RoundType, Side, TeamId, TeamRef};
pub use round::RoundOrder;
pub use score::{Score, ScorePair, SetScore, SuperTiebreak};
