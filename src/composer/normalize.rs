//! Cleans up model output before it becomes part of the poem.

use regex::Regex;
use std::sync::LazyLock;

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:line\s*\d+|title)\s*(?::|[.\-]\s)\s*").unwrap());

const QUOTE_PAIRS: [(char, char); 5] = [
    ('"', '"'),
    ('\'', '\''),
    ('\u{201c}', '\u{201d}'),
    ('\u{2018}', '\u{2019}'),
    ('\u{ab}', '\u{bb}'),
];

/// Normalize a generated poem line: first non-empty line, no label, no
/// surrounding quotes.
pub fn normalize_line(raw: &str) -> String {
    let first = first_nonempty_line(raw);
    let unlabeled = LABEL_RE.replace(first, "");
    strip_quotes(unlabeled.trim()).to_string()
}

/// Like [`normalize_line`], also dropping markdown emphasis and heading marks.
pub fn normalize_title(raw: &str) -> String {
    let first = first_nonempty_line(raw).trim_start_matches('#').trim();
    let unlabeled = LABEL_RE.replace(first, "");
    let unmarked = unlabeled.trim().trim_matches('*').trim();
    strip_quotes(unmarked).to_string()
}

fn first_nonempty_line(raw: &str) -> &str {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}

/// Peel quote pairs that wrap the whole line. A pair is only removed when
/// neither quote character occurs inside, so `"Stay," she said, "go"` keeps
/// both of its quotations.
fn strip_quotes(mut text: &str) -> &str {
    loop {
        let mut chars = text.chars();
        let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
            return text;
        };
        if !QUOTE_PAIRS.contains(&(first, last)) {
            return text;
        }
        let inner = &text[first.len_utf8()..text.len() - last.len_utf8()];
        if inner.contains(first) || inner.contains(last) {
            return text;
        }
        text = inner.trim();
    }
}
