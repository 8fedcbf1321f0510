use super::compose;
use super::stub_provider::{CallKind, StubProvider};
use versecraft::GenerationRequest;
use versecraft::composer::StopReason;

#[tokio::test]
async fn guidance_length_beats_sonnet() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        style: Some("Sonnet".into()),
        guidance: Some("Keep it tight: 4 lines long.".into()),
        ..GenerationRequest::default()
    };

    let (poem, transcript) = compose(&provider, &request).await;

    assert_eq!(poem.len(), 4);
    assert_eq!(provider.count(CallKind::Judgment), 1);
    assert_eq!(transcript.finished, Some((4, StopReason::Ceiling)));
}

#[tokio::test]
async fn guidance_length_beats_haiku_upwards() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        style: Some("haiku".into()),
        guidance: Some("a chain of haiku, 9 lines total".into()),
        ..GenerationRequest::default()
    };

    let (poem, _) = compose(&provider, &request).await;

    assert_eq!(poem.len(), 9);
}

#[tokio::test]
async fn guidance_without_count_falls_back_to_style() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        style: Some("limerick".into()),
        guidance: Some("make it silly".into()),
        ..GenerationRequest::default()
    };

    let (poem, transcript) = compose(&provider, &request).await;

    assert_eq!(poem.len(), 5);
    assert_eq!(transcript.finished, Some((5, StopReason::StructuralCount)));
}

#[tokio::test]
async fn sonnet_runs_to_fourteen_when_never_judged_complete() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        style: Some("sonnet".into()),
        ..GenerationRequest::default()
    };

    let (poem, transcript) = compose(&provider, &request).await;

    assert_eq!(poem.len(), 14);
    // Judged after lines 3 through 13; line 14 is decided by the count.
    assert_eq!(provider.count(CallKind::Judgment), 11);
    assert_eq!(transcript.finished, Some((14, StopReason::StructuralCount)));
}
