pub mod style;
pub mod transcript;

pub use transcript::ConsoleTranscript;
