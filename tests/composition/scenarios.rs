use super::stub_provider::{CallKind, RecordingTranscript, STUB_SEED, STUB_TITLE, StubProvider};
use super::{compose, composer};
use versecraft::GenerationRequest;
use versecraft::composer::StopReason;

#[tokio::test]
async fn haiku_about_seasons_takes_four_calls() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        style: Some("Haiku".into()),
        theme: Some("Seasons".into()),
        ..GenerationRequest::default()
    };

    let (poem, transcript) = compose(&provider, &request).await;

    assert_eq!(poem.title(), STUB_TITLE);
    assert_eq!(poem.lines(), [STUB_SEED, "stub line 2", "stub line 3"]);

    let kinds: Vec<CallKind> = provider.calls().iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        [
            CallKind::Title,
            CallKind::SeedLine,
            CallKind::NextLine,
            CallKind::NextLine
        ]
    );
    assert_eq!(transcript.finished, Some((3, StopReason::StructuralCount)));
}

#[tokio::test]
async fn haiku_prompts_carry_theme_and_position_directives() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        style: Some("haiku".into()),
        theme: Some("Seasons".into()),
        ..GenerationRequest::default()
    };

    compose(&provider, &request).await;

    let calls = provider.calls();
    assert!(
        calls
            .iter()
            .all(|c| c.prompt.contains("The poem must be about: Seasons."))
    );
    assert!(calls[2].prompt.contains("**Line 2: 7 syllables"));
    assert!(calls[3].prompt.contains("**Line 3: 5 syllables"));
}

#[tokio::test]
async fn six_line_guidance_judges_once_at_the_end() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        guidance: Some("about the sea, 6 lines long".into()),
        ..GenerationRequest::default()
    };

    let (poem, transcript) = compose(&provider, &request).await;

    assert_eq!(poem.len(), 6);
    assert_eq!(provider.count(CallKind::Judgment), 1);
    assert_eq!(provider.calls().len(), 8);

    let judgment = provider.calls().last().cloned().unwrap();
    assert_eq!(judgment.kind, CallKind::Judgment);
    assert!(judgment.prompt.contains("stub line 6"));
    assert!(judgment.prompt.contains("GUIDANCE (HIGHEST PRIORITY)"));

    // A "no" at the ceiling does not extend the poem.
    assert_eq!(transcript.finished, Some((6, StopReason::Ceiling)));
}

#[tokio::test]
async fn affirmative_judgment_stops_after_third_line() {
    let provider = StubProvider::answering("Yes, it feels finished.");

    let (poem, transcript) = compose(&provider, &GenerationRequest::default()).await;

    assert_eq!(poem.len(), 3);
    assert_eq!(provider.count(CallKind::Judgment), 1);
    assert_eq!(transcript.finished, Some((3, StopReason::Judgment)));
}

#[tokio::test]
async fn default_ceiling_is_twelve_lines() {
    let provider = StubProvider::answering("no");

    let (poem, transcript) = compose(&provider, &GenerationRequest::default()).await;

    assert_eq!(poem.len(), 12);
    // Judged after every line from the third through the twelfth.
    assert_eq!(provider.count(CallKind::Judgment), 10);
    assert_eq!(provider.count(CallKind::NextLine), 11);
    assert_eq!(transcript.finished, Some((12, StopReason::Ceiling)));
}

#[tokio::test]
async fn supplied_title_and_seed_skip_their_calls() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        title: Some("Low Tide".into()),
        seed_line: Some("The harbor empties into evening".into()),
        style: Some("haiku".into()),
        ..GenerationRequest::default()
    };

    let (poem, transcript) = compose(&provider, &request).await;

    assert_eq!(poem.title(), "Low Tide");
    assert_eq!(poem.lines()[0], "The harbor empties into evening");
    assert_eq!(provider.count(CallKind::Title), 0);
    assert_eq!(provider.count(CallKind::SeedLine), 0);
    assert_eq!(provider.calls().len(), 2);
    assert_eq!(transcript.title.as_deref(), Some("Low Tide"));
}

#[tokio::test]
async fn transcript_sees_every_line_in_order() {
    let provider = StubProvider::answering("no");
    let request = GenerationRequest {
        style: Some("limerick".into()),
        ..GenerationRequest::default()
    };

    let (poem, transcript) = compose(&provider, &request).await;

    let indices: Vec<usize> = transcript.lines.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, [1, 2, 3, 4, 5]);
    let lines: Vec<&str> = transcript.lines.iter().map(|(_, l)| l.as_str()).collect();
    assert_eq!(lines, poem.lines());
    // Title arrives quoted from the stub and is normalized before display.
    assert_eq!(transcript.title.as_deref(), Some(STUB_TITLE));
}

#[tokio::test]
async fn random_style_gets_no_style_block() {
    let provider = StubProvider::answering("yes");
    let request = GenerationRequest {
        style: Some("random".into()),
        theme: Some("random".into()),
        ..GenerationRequest::default()
    };

    compose(&provider, &request).await;

    for call in provider.calls() {
        assert!(!call.prompt.contains("**Style:"));
        assert!(!call.prompt.contains("The poem must be about"));
    }
}

#[tokio::test]
async fn second_run_carries_nothing_from_the_first() {
    let provider = StubProvider::answering("no");
    let composer = composer(&provider);

    let first = GenerationRequest {
        user_bio: Some("A lighthouse keeper on Skerryvore.".into()),
        guidance: Some("Mention the foghorn. 4 lines long.".into()),
        theme: Some("storms".into()),
        style: Some("sonnet".into()),
        ..GenerationRequest::default()
    };
    let first_poem = composer
        .compose(&first, &mut RecordingTranscript::default())
        .await
        .unwrap();
    let first_calls = provider.calls().len();

    let second = GenerationRequest {
        user_bio: Some("A baker in Lyon.".into()),
        ..GenerationRequest::default()
    };
    let second_poem = composer
        .compose(&second, &mut RecordingTranscript::default())
        .await
        .unwrap();

    assert_eq!(first_poem.len(), 4);
    assert_eq!(second_poem.len(), 12);

    let second_calls = &provider.calls()[first_calls..];
    assert!(!second_calls.is_empty());
    for call in second_calls {
        assert!(call.prompt.contains("A baker in Lyon."));
        for leaked in ["Skerryvore", "foghorn", "GUIDANCE", "storms", "**Style:"] {
            assert!(!call.prompt.contains(leaked), "{leaked} leaked into {:?}", call.kind);
        }
    }
}
