//! Score validation: one rule set per match format, picked by `rules_for`.
//!
//! Each format validates the raw pairs in the same order: entry count, then
//! every set's games, then the 1-1 split decider (third set or super
//! tie-break), then the super tie-break's own range.

use crate::models::{MatchFormat, Score, ScoreError, ScorePair, SetScore, Side};

/// Points needed to take a super tie-break, with a 2-point margin.
pub const SUPER_TIEBREAK_POINTS: u32 = 10;
const SUPER_TIEBREAK_MARGIN: u32 = 2;

/// How a single set is won.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetRule {
    /// First to `games` with a 2-game lead, or `games + 1` against
    /// `games - 1` or `games` (7-5 / 7-6 for six-game sets).
    Standard { games: u32 },
    /// Exactly `games` against at most `games - 1`; no extension.
    Pro { games: u32 },
}

impl SetRule {
    pub fn accepts(self, set: &SetScore) -> bool {
        let (max, min) = (set.max(), set.min());
        match self {
            SetRule::Standard { games } => {
                if max == games {
                    min + 2 <= games
                } else if max == games + 1 {
                    min + 1 == games || min == games
                } else {
                    false
                }
            }
            SetRule::Pro { games } => max == games && min < games,
        }
    }
}

/// Validation strategy for one match format.
pub trait FormatRules: Sync {
    fn format(&self) -> MatchFormat;

    /// Set (or set-equivalent) wins needed to take the match. The super
    /// tie-break counts as the deciding set.
    fn sets_to_win(&self) -> usize;

    /// Check raw pairs against the format and split them into sets and an
    /// optional super tie-break.
    fn validate(&self, pairs: &[ScorePair]) -> Result<Score, ScoreError>;
}

/// A1: up to three real sets.
#[derive(Debug)]
pub struct BestOfThreeSets {
    pub set_rule: SetRule,
}

/// B1 and C1: two sets, super tie-break only on a 1-1 split.
#[derive(Debug)]
pub struct TwoSetsSuperTiebreak {
    pub format: MatchFormat,
    pub set_rule: SetRule,
}

/// D1: one long set.
#[derive(Debug)]
pub struct SingleSet {
    pub set_rule: SetRule,
}

static A1_RULES: BestOfThreeSets = BestOfThreeSets {
    set_rule: SetRule::Standard { games: 6 },
};

static B1_RULES: TwoSetsSuperTiebreak = TwoSetsSuperTiebreak {
    format: MatchFormat::B1,
    set_rule: SetRule::Standard { games: 6 },
};

static C1_RULES: TwoSetsSuperTiebreak = TwoSetsSuperTiebreak {
    format: MatchFormat::C1,
    set_rule: SetRule::Standard { games: 4 },
};

static D1_RULES: SingleSet = SingleSet {
    set_rule: SetRule::Pro { games: 9 },
};

/// Rule set for a format.
pub fn rules_for(format: MatchFormat) -> &'static dyn FormatRules {
    match format {
        MatchFormat::A1 => &A1_RULES,
        MatchFormat::B1 => &B1_RULES,
        MatchFormat::C1 => &C1_RULES,
        MatchFormat::D1 => &D1_RULES,
    }
}

/// Validate parsed pairs for `format`.
pub fn validate_score(pairs: &[ScorePair], format: MatchFormat) -> Result<Score, ScoreError> {
    rules_for(format).validate(pairs)
}

fn check_count(
    format: MatchFormat,
    pairs: &[ScorePair],
    allowed: std::ops::RangeInclusive<usize>,
) -> Result<(), ScoreError> {
    if allowed.contains(&pairs.len()) {
        Ok(())
    } else {
        Err(ScoreError::InvalidSetCount {
            format,
            count: pairs.len(),
        })
    }
}

fn check_sets(format: MatchFormat, rule: SetRule, sets: &[SetScore]) -> Result<(), ScoreError> {
    match sets.iter().find(|set| !rule.accepts(set)) {
        Some(set) => Err(ScoreError::InvalidSetScore {
            format,
            token: set.to_string(),
        }),
        None => Ok(()),
    }
}

/// Whether each side took one of the two sets.
fn is_split(first: &SetScore, second: &SetScore) -> bool {
    matches!(
        (first.leader(), second.leader()),
        (Some(Side::One), Some(Side::Two)) | (Some(Side::Two), Some(Side::One))
    )
}

impl FormatRules for BestOfThreeSets {
    fn format(&self) -> MatchFormat {
        MatchFormat::A1
    }

    fn sets_to_win(&self) -> usize {
        2
    }

    fn validate(&self, pairs: &[ScorePair]) -> Result<Score, ScoreError> {
        check_count(self.format(), pairs, 2..=3)?;
        check_sets(self.format(), self.set_rule, pairs)?;
        match (is_split(&pairs[0], &pairs[1]), pairs.len()) {
            (true, 2) => return Err(ScoreError::MissingThirdSet),
            (false, 3) => return Err(ScoreError::UnexpectedThirdSet),
            _ => {}
        }
        Ok(Score {
            sets: pairs.to_vec(),
            super_tiebreak: None,
        })
    }
}

impl FormatRules for TwoSetsSuperTiebreak {
    fn format(&self) -> MatchFormat {
        self.format
    }

    fn sets_to_win(&self) -> usize {
        2
    }

    fn validate(&self, pairs: &[ScorePair]) -> Result<Score, ScoreError> {
        check_count(self.format, pairs, 2..=3)?;
        let (sets, extra) = pairs.split_at(2);
        check_sets(self.format, self.set_rule, sets)?;

        let super_tiebreak = extra.first().copied();
        match (is_split(&sets[0], &sets[1]), super_tiebreak) {
            (true, None) => {
                return Err(ScoreError::MissingSuperTiebreak {
                    format: self.format,
                })
            }
            (false, Some(tb)) => {
                return Err(ScoreError::UnexpectedSuperTiebreak {
                    format: self.format,
                    token: tb.to_string(),
                })
            }
            _ => {}
        }

        if let Some(tb) = super_tiebreak {
            if tb.max() < SUPER_TIEBREAK_POINTS || tb.max() - tb.min() < SUPER_TIEBREAK_MARGIN {
                return Err(ScoreError::InvalidSuperTiebreak {
                    token: tb.to_string(),
                });
            }
        }

        Ok(Score {
            sets: sets.to_vec(),
            super_tiebreak,
        })
    }
}

impl FormatRules for SingleSet {
    fn format(&self) -> MatchFormat {
        MatchFormat::D1
    }

    fn sets_to_win(&self) -> usize {
        1
    }

    fn validate(&self, pairs: &[ScorePair]) -> Result<Score, ScoreError> {
        check_count(self.format(), pairs, 1..=1)?;
        check_sets(self.format(), self.set_rule, pairs)?;
        Ok(Score {
            sets: pairs.to_vec(),
            super_tiebreak: None,
        })
    }
}
