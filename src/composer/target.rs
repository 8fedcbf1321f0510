use super::guidance::extract_line_count;
use super::state::CompositionContext;
use strum::Display;

/// Ceiling used when neither guidance nor style fixes a length.
pub const DEFAULT_TARGET_LENGTH: usize = 12;

/// Where a [`TargetLength`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TargetSource {
    Guidance,
    Style,
    Default,
}

/// The single line-count ceiling for a run, resolved once before composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLength {
    pub lines: usize,
    pub source: TargetSource,
}

impl TargetLength {
    /// Guidance overrides style, style overrides the default.
    pub fn resolve(ctx: &CompositionContext) -> Self {
        if let Some(lines) = extract_line_count(ctx.guidance.as_deref()) {
            return Self {
                lines,
                source: TargetSource::Guidance,
            };
        }
        if let Some(lines) = ctx.style.target_length() {
            return Self {
                lines,
                source: TargetSource::Style,
            };
        }
        Self {
            lines: DEFAULT_TARGET_LENGTH,
            source: TargetSource::Default,
        }
    }

    pub fn from_guidance(&self) -> bool {
        self.source == TargetSource::Guidance
    }
}
