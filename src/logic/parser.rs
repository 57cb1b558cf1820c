//! Score parser: raw string to ordered `a/b` pairs. Knows nothing about formats.

use crate::models::{ScorePair, ScoreError};

/// Parse a score string such as `"6/3 4/6 10/8"` into pairs, in token order.
///
/// Tokens are whitespace separated and must look like `<digits>/<digits>` or
/// `<digits>-<digits>`. An empty (or blank) string is a parse error.
pub fn parse_score(raw: &str) -> Result<Vec<ScorePair>, ScoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ScoreError::Parse {
            token: String::new(),
        });
    }
    raw.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<ScorePair, ScoreError> {
    let invalid = || ScoreError::Parse {
        token: token.to_string(),
    };
    let (a, b) = token.split_once(['/', '-']).ok_or_else(invalid)?;
    Ok(ScorePair::new(
        parse_count(a).ok_or_else(invalid)?,
        parse_count(b).ok_or_else(invalid)?,
    ))
}

fn parse_count(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
