#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use versecraft::PoemState;
use versecraft::composer::{StopReason, TranscriptSink};
use versecraft::providers::Provider;

pub const STUB_TITLE: &str = "Stub Title";
pub const STUB_SEED: &str = "stub opening line";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Title,
    SeedLine,
    NextLine,
    Judgment,
}

impl CallKind {
    fn classify(prompt: &str) -> Self {
        if prompt.starts_with("Write a title") {
            Self::Title
        } else if prompt.starts_with("Write the opening line") {
            Self::SeedLine
        } else if prompt.starts_with("Continue the poem") {
            Self::NextLine
        } else {
            Self::Judgment
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub kind: CallKind,
    pub prompt: String,
}

/// Deterministic backend: fixed text per request kind, a scripted judgment
/// answer, and an optional failure on a given request kind.
pub struct StubProvider {
    judgment: String,
    fail_on: Option<CallKind>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubProvider {
    pub fn answering(judgment: &str) -> Arc<Self> {
        Arc::new(Self {
            judgment: judgment.to_string(),
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_on(kind: CallKind) -> Arc<Self> {
        Arc::new(Self {
            judgment: "no".to_string(),
            fail_on: Some(kind),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, kind: CallKind) -> usize {
        self.calls().iter().filter(|c| c.kind == kind).count()
    }
}

#[async_trait]
impl Provider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn chat_with_system(
        &self,
        _system_prompt: Option<&str>,
        message: &str,
        _model: &str,
        _temperature: f64,
    ) -> anyhow::Result<String> {
        let kind = CallKind::classify(message);
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                kind,
                prompt: message.to_string(),
            });
            calls.iter().filter(|c| c.kind == CallKind::NextLine).count() + 1
        };

        if self.fail_on == Some(kind) {
            anyhow::bail!("stub backend unavailable");
        }

        Ok(match kind {
            CallKind::Title => format!("\"{STUB_TITLE}\""),
            CallKind::SeedLine => STUB_SEED.to_string(),
            CallKind::NextLine => format!("stub line {index}"),
            CallKind::Judgment => self.judgment.clone(),
        })
    }

    async fn list_models(&self) -> anyhow::Result<Vec<String>> {
        Ok(vec!["stub-model".to_string()])
    }
}

/// Keeps everything the composer reports.
#[derive(Debug, Default)]
pub struct RecordingTranscript {
    pub title: Option<String>,
    pub lines: Vec<(usize, String)>,
    pub finished: Option<(usize, StopReason)>,
}

impl TranscriptSink for RecordingTranscript {
    fn title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn line(&mut self, index: usize, line: &str) {
        self.lines.push((index, line.to_string()));
    }

    fn finished(&mut self, poem: &PoemState, reason: StopReason) {
        self.finished = Some((poem.len(), reason));
    }
}
