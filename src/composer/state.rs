use super::style::StyleRule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The poem being composed: a title plus its lines in reading order.
///
/// `lines` is seeded with the first line at construction and only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemState {
    title: String,
    lines: Vec<String>,
}

impl PoemState {
    pub fn new(title: impl Into<String>, seed_line: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: vec![seed_line.into()],
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// A poem always holds its seed line, so this is false in practice.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Title and lines as the model sees them in prompts.
    pub fn excerpt(&self) -> String {
        let mut out = String::with_capacity(
            self.title.len() + self.lines.iter().map(|l| l.len() + 1).sum::<usize>() + 2,
        );
        out.push_str(&self.title);
        out.push_str("\n\n");
        out.push_str(&self.lines.join("\n"));
        out
    }
}

impl fmt::Display for PoemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.excerpt())
    }
}

/// Input bundle for a single run. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub title: Option<String>,
    pub seed_line: Option<String>,
    pub theme: Option<String>,
    pub style: Option<String>,
    pub user_bio: Option<String>,
    pub guidance: Option<String>,
}

/// Normalized, read-only view of a [`GenerationRequest`] that is threaded
/// through every directive-composition call.
///
/// The `"random"` sentinel and blank values are resolved here, once, so
/// nothing downstream has to special-case them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionContext {
    pub theme: Option<String>,
    pub style: StyleRule,
    /// Display name of an explicitly requested style; `None` for missing or
    /// `"random"` styles, which add no style block to prompts.
    pub style_name: Option<String>,
    pub user_bio: Option<String>,
    pub guidance: Option<String>,
}

impl CompositionContext {
    pub fn from_request(request: &GenerationRequest) -> Self {
        let style = StyleRule::resolve(request.style.as_deref());
        let style_name = non_sentinel(request.style.as_deref()).map(|_| style.name().to_string());
        Self {
            theme: non_sentinel(request.theme.as_deref()),
            style,
            style_name,
            user_bio: verbatim(request.user_bio.as_deref()),
            guidance: verbatim(request.guidance.as_deref()),
        }
    }
}

/// Free text reaches the prompt untouched; blank counts as absent.
fn verbatim(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(ToString::to_string)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

fn non_sentinel(value: Option<&str>) -> Option<String> {
    non_blank(value).filter(|v| !v.eq_ignore_ascii_case("random"))
}
