//! Decides, after each appended line, whether the poem is finished.
//!
//! Hard structural counts decide whenever they can; the model is only asked
//! for a completion judgment when they can't.

use super::target::{TargetLength, TargetSource};
use strum::Display;

/// Lines a poem must have before the model is asked whether it is done.
pub const MIN_LINES_BEFORE_JUDGMENT: usize = 3;

const AFFIRMATIVE_TOKEN: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PolicyState {
    Growing,
    Complete,
}

/// What the loop should do after appending a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Keep growing without asking the model.
    Continue,
    /// Finished by a structural rule.
    Complete,
    /// Ask the model for a completion judgment.
    Judge,
}

#[derive(Debug, Clone)]
pub struct TerminationPolicy {
    target: TargetLength,
    state: PolicyState,
}

impl TerminationPolicy {
    pub fn new(target: TargetLength) -> Self {
        Self {
            target,
            state: PolicyState::Growing,
        }
    }

    pub fn state(&self) -> PolicyState {
        self.state
    }

    pub fn target(&self) -> TargetLength {
        self.target
    }

    pub fn is_complete(&self) -> bool {
        self.state == PolicyState::Complete
    }

    /// Whether the loop may append another line. The target is a hard
    /// ceiling regardless of policy state.
    pub fn may_grow(&self, line_count: usize) -> bool {
        !self.is_complete() && line_count < self.target.lines
    }

    /// Evaluate the rules for a poem that now has `line_count` lines.
    pub fn evaluate(&mut self, line_count: usize) -> Evaluation {
        if self.is_complete() {
            return Evaluation::Complete;
        }

        let ceiling = self.target.lines;
        match self.target.source {
            TargetSource::Guidance if line_count < ceiling => Evaluation::Continue,
            TargetSource::Guidance => Evaluation::Judge,
            TargetSource::Style if line_count == ceiling => {
                self.state = PolicyState::Complete;
                Evaluation::Complete
            }
            TargetSource::Style | TargetSource::Default => {
                if line_count >= MIN_LINES_BEFORE_JUDGMENT || line_count == ceiling {
                    Evaluation::Judge
                } else {
                    Evaluation::Continue
                }
            }
        }
    }

    /// Apply the model's completion judgment. Returns true when it affirmed.
    ///
    /// A negative verdict at the ceiling leaves the policy `Growing`; the
    /// ceiling still stops the loop.
    pub fn apply_judgment(&mut self, response: &str) -> bool {
        let affirmed = is_affirmative(response);
        if affirmed {
            self.state = PolicyState::Complete;
        }
        affirmed
    }
}

pub fn is_affirmative(response: &str) -> bool {
    response.to_lowercase().contains(AFFIRMATIVE_TOKEN)
}
