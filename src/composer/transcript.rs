use super::state::PoemState;
use strum::Display;

/// Why a run stopped growing the poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum StopReason {
    /// The style's fixed line count was reached.
    StructuralCount,
    /// The model judged the poem complete.
    Judgment,
    /// The resolved target length was reached.
    Ceiling,
}

/// Receives the poem as it is produced, for interactive display.
pub trait TranscriptSink: Send {
    fn title(&mut self, title: &str);

    fn line(&mut self, index: usize, line: &str);

    fn finished(&mut self, _poem: &PoemState, _reason: StopReason) {}
}

/// Discards the transcript.
#[derive(Debug, Default)]
pub struct NullTranscript;

impl TranscriptSink for NullTranscript {
    fn title(&mut self, _title: &str) {}

    fn line(&mut self, _index: usize, _line: &str) {}
}
