use super::compose;
use super::stub_provider::{CallKind, StubProvider};
use versecraft::GenerationRequest;
use versecraft::composer::TargetLength;
use versecraft::composer::state::CompositionContext;

const STYLES: [Option<&str>; 6] = [
    None,
    Some("random"),
    Some("haiku"),
    Some("limerick"),
    Some("sonnet"),
    Some("ghazal"),
];

const GUIDANCE: [Option<&str>; 4] = [
    None,
    Some("gentle and slow"),
    Some("2 lines long"),
    Some("exactly 20 lines in length"),
];

#[tokio::test]
async fn every_combination_stops_within_its_target() {
    for answer in ["no", "yes"] {
        for style in STYLES {
            for guidance in GUIDANCE {
                let provider = StubProvider::answering(answer);
                let request = GenerationRequest {
                    style: style.map(Into::into),
                    guidance: guidance.map(Into::into),
                    ..GenerationRequest::default()
                };
                let target = TargetLength::resolve(&CompositionContext::from_request(&request));

                let (poem, _) = compose(&provider, &request).await;

                let label = format!("style={style:?} guidance={guidance:?} answer={answer}");
                assert!(poem.len() <= target.lines, "{label}");
                assert!(provider.count(CallKind::NextLine) < target.lines, "{label}");
                if answer == "no" {
                    assert_eq!(poem.len(), target.lines, "{label}");
                }
            }
        }
    }
}

#[tokio::test]
async fn single_line_target_never_asks_for_more() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        guidance: Some("1 line long".into()),
        ..GenerationRequest::default()
    };

    let (poem, _) = compose(&provider, &request).await;

    assert_eq!(poem.len(), 1);
    assert_eq!(provider.count(CallKind::NextLine), 0);
    assert_eq!(provider.count(CallKind::Judgment), 0);
}
