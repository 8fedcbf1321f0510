use super::style;
use crate::composer::{PoemState, StopReason, TranscriptSink};

/// Prints each line to stdout as soon as it is written.
#[derive(Debug, Default)]
pub struct ConsoleTranscript {
    show_line_numbers: bool,
}

impl ConsoleTranscript {
    pub fn new(show_line_numbers: bool) -> Self {
        Self { show_line_numbers }
    }
}

impl TranscriptSink for ConsoleTranscript {
    fn title(&mut self, title: &str) {
        println!();
        println!("{}", style::header(title));
        println!();
    }

    fn line(&mut self, index: usize, line: &str) {
        if self.show_line_numbers {
            println!("{} {line}", style::dim(format!("{index:>2}")));
        } else {
            println!("{line}");
        }
    }

    fn finished(&mut self, poem: &PoemState, reason: StopReason) {
        let why = match reason {
            StopReason::StructuralCount => "form complete",
            StopReason::Judgment => "judged complete",
            StopReason::Ceiling => "length reached",
        };
        println!();
        println!("{}", style::dim(format!("{} lines, {why}", poem.len())));
    }
}
