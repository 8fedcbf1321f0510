//! Explicit line-count extraction from free-form guidance.
//!
//! A heuristic, not a grammar: the first "<n> line(s) long / in length /
//! total" mention wins and is taken at face value.

use regex::Regex;
use std::sync::LazyLock;

static LINE_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^\w-])(-?\d+)\s*lines?\s+(?:long|in\s+length|total)\b").unwrap()
});

/// Return the explicit target line count in `guidance`, if any.
///
/// Non-positive and unparseable counts are treated as absent.
pub fn extract_line_count(guidance: Option<&str>) -> Option<usize> {
    let captures = LINE_COUNT_RE.captures(guidance?)?;
    let count: i64 = captures.get(1)?.as_str().parse().ok()?;
    if count <= 0 {
        return None;
    }
    usize::try_from(count).ok()
}
