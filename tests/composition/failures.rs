use super::composer;
use super::stub_provider::{CallKind, RecordingTranscript, StubProvider};
use versecraft::error::LlmError;
use versecraft::{GenerationRequest, VerseError};

#[tokio::test]
async fn title_failure_aborts_before_any_line() {
    let provider = StubProvider::failing_on(CallKind::Title);
    let mut transcript = RecordingTranscript::default();

    let err = composer(&provider)
        .compose(&GenerationRequest::default(), &mut transcript)
        .await
        .unwrap_err();

    match err {
        VerseError::Llm(LlmError::Generation { request, message }) => {
            assert_eq!(request, "title");
            assert!(message.contains("stub backend unavailable"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(transcript.title.is_none());
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn judgment_failure_is_fatal_mid_poem() {
    let provider = StubProvider::failing_on(CallKind::Judgment);
    let mut transcript = RecordingTranscript::default();

    let err = composer(&provider)
        .compose(&GenerationRequest::default(), &mut transcript)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("completion judgment generation failed"));
    assert_eq!(transcript.lines.len(), 3);
    assert!(transcript.finished.is_none());
}
