//! Line-by-line poem composition.

pub mod generation;
pub mod guidance;
pub mod normalize;
pub mod state;
pub mod style;
pub mod target;
pub mod termination;
pub mod transcript;

pub use generation::{GenerationSettings, PoemComposer};
pub use guidance::extract_line_count;
pub use state::{CompositionContext, GenerationRequest, PoemState};
pub use style::StyleRule;
pub use target::{DEFAULT_TARGET_LENGTH, TargetLength, TargetSource};
pub use termination::{Evaluation, PolicyState, TerminationPolicy};
pub use transcript::{NullTranscript, StopReason, TranscriptSink};
