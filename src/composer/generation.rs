//! The generation loop: owns the poem for one run and drives the sequence of
//! model calls until the termination policy (or the ceiling) stops it.

use super::normalize::{normalize_line, normalize_title};
use super::state::{CompositionContext, GenerationRequest, PoemState};
use super::target::TargetLength;
use super::termination::{Evaluation, TerminationPolicy};
use super::transcript::{StopReason, TranscriptSink};
use crate::error::{LlmError, Result};
use crate::prompt::{DirectiveTarget, PromptDirectiveComposer};
use crate::providers::Provider;
use crate::utils::text::{single_line, truncate_with_ellipsis};
use std::sync::Arc;
use tracing::{debug, info};

const PROMPT_PREVIEW_CHARS: usize = 120;

/// Model parameters for every call of a run.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
}

/// Composes poems against a single provider/model.
///
/// Holds no per-run state: everything a run needs is passed to
/// [`PoemComposer::compose`], so one composer can serve any number of runs.
pub struct PoemComposer {
    provider: Arc<dyn Provider>,
    settings: GenerationSettings,
    prompts: PromptDirectiveComposer,
}

impl PoemComposer {
    pub fn new(provider: Arc<dyn Provider>, settings: GenerationSettings) -> Result<Self> {
        Ok(Self {
            provider,
            settings,
            prompts: PromptDirectiveComposer::new()?,
        })
    }

    /// Run one composition. Any generation failure aborts the run.
    pub async fn compose(
        &self,
        request: &GenerationRequest,
        transcript: &mut dyn TranscriptSink,
    ) -> Result<PoemState> {
        let ctx = CompositionContext::from_request(request);
        let target = TargetLength::resolve(&ctx);
        info!(
            provider = self.provider.name(),
            model = %self.settings.model,
            style = %ctx.style,
            target_lines = target.lines,
            target_source = %target.source,
            "composing poem"
        );

        let title = match supplied(request.title.as_deref()) {
            Some(title) => title,
            None => normalize_title(&self.generate(&DirectiveTarget::Title, &ctx).await?),
        };
        transcript.title(&title);

        let seed_line = match supplied(request.seed_line.as_deref()) {
            Some(line) => line,
            None => normalize_line(
                &self
                    .generate(&DirectiveTarget::SeedLine { title: &title }, &ctx)
                    .await?,
            ),
        };
        transcript.line(1, &seed_line);

        let mut poem = PoemState::new(title, seed_line);
        let mut policy = TerminationPolicy::new(target);
        let mut reason = StopReason::Ceiling;

        while policy.may_grow(poem.len()) {
            let index = poem.len() + 1;
            let raw = self
                .generate(&DirectiveTarget::NextLine { poem: &poem, index }, &ctx)
                .await?;
            let line = normalize_line(&raw);
            transcript.line(index, &line);
            poem.push_line(line);

            match policy.evaluate(poem.len()) {
                Evaluation::Continue => {}
                Evaluation::Complete => {
                    reason = StopReason::StructuralCount;
                    break;
                }
                Evaluation::Judge => {
                    let verdict = self
                        .generate(&DirectiveTarget::CompletionJudgment { poem: &poem }, &ctx)
                        .await?;
                    if policy.apply_judgment(&verdict) {
                        reason = StopReason::Judgment;
                        break;
                    }
                    debug!(lines = poem.len(), verdict = %verdict.trim(), "poem judged incomplete");
                }
            }
        }

        info!(lines = poem.len(), %reason, policy = %policy.state(), "composition finished");
        transcript.finished(&poem, reason);
        Ok(poem)
    }

    async fn generate(
        &self,
        target: &DirectiveTarget<'_>,
        ctx: &CompositionContext,
    ) -> Result<String> {
        let kind = target.kind();
        let prompt = self.prompts.compose(target, ctx)?;
        debug!(
            request = %kind,
            prompt = %truncate_with_ellipsis(&single_line(&prompt), PROMPT_PREVIEW_CHARS),
            "generation request"
        );

        let response = self
            .provider
            .chat(&prompt, &self.settings.model, self.settings.temperature)
            .await
            .map_err(|e| LlmError::Generation {
                request: kind.to_string(),
                message: format!("{e:#}"),
            })?;
        debug!(request = %kind, chars = response.len(), "generation response");
        Ok(response)
    }
}

fn supplied(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
