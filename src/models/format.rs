//! Match formats (scoring regimes).

use serde::{Deserialize, Serialize};

/// Scoring regime of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchFormat {
    /// Best of 3 sets to 6 games; a real third set decides a 1-1 split.
    A1,
    /// 2 sets to 6 games, super tie-break on a 1-1 split.
    B1,
    /// 2 sets to 4 games, super tie-break on a 1-1 split.
    C1,
    /// One set to 9 games.
    D1,
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            MatchFormat::A1 => "A1",
            MatchFormat::B1 => "B1",
            MatchFormat::C1 => "C1",
            MatchFormat::D1 => "D1",
        };
        f.write_str(code)
    }
}
