//! Assembles the text sent to the model for each request kind.
//!
//! Blocks are rendered in a fixed order: role and poem-so-far, persona,
//! theme, guidance, style, output format. Guidance and the style directive sit
//! near the end so they are the last constraints the model reads.

use super::engine::TeraEngine;
use crate::composer::{CompositionContext, PoemState};
use crate::error::PromptError;
use strum::Display;
use tera::Context;

const DIRECTIVE_TEMPLATE: &str = r#"
{%- if kind == "title" -%}
Write a title for a new poem.
{%- elif kind == "seed_line" -%}
Write the opening line of a poem titled "{{ title }}". It should stand on its own like a line worth quoting.
{%- elif kind == "next_line" -%}
Continue the poem below by writing line {{ line_index }}.
{%- else -%}
Read the poem below and decide whether it feels complete, or whether it still needs more lines.
{%- endif %}
{%- if poem %}

Poem so far:
{{ poem }}
{%- endif %}
{%- if user_bio %}

Write from the perspective of the person described here, so the poem reflects their voice:
{{ user_bio }}
{%- endif %}
{%- if theme %}

The poem must be about: {{ theme }}.
{%- endif %}
{%- if guidance %}

========== GUIDANCE (HIGHEST PRIORITY) ==========
{{ guidance }}
=================================================
Follow this guidance above all else. Where it conflicts with the theme or style, the guidance wins.
{%- endif %}
{%- if style %}

**Style: {{ style }}.** Strictly adhere to the structure, rhythm and rhyme of a {{ style }}.
{%- if rhyme_scheme %} Rhyme scheme: {{ rhyme_scheme }}.{% endif %}
{%- if directive %}
**Line {{ line_index }}: {{ directive }}**
{%- endif %}
{%- endif %}

{{ output_format }}"#;

const TEMPLATE_NAME: &str = "poem_directive";

/// The four kinds of generation request a run issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RequestKind {
    #[strum(to_string = "title")]
    Title,
    #[strum(to_string = "seed line")]
    SeedLine,
    #[strum(to_string = "next line")]
    NextLine,
    #[strum(to_string = "completion judgment")]
    CompletionJudgment,
}

impl RequestKind {
    fn template_key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::SeedLine => "seed_line",
            Self::NextLine => "next_line",
            Self::CompletionJudgment => "completion_judgment",
        }
    }

    fn output_format(self) -> &'static str {
        match self {
            Self::Title => {
                "Respond with only the title. No quotation marks, no commentary."
            }
            Self::SeedLine | Self::NextLine => {
                "Respond with only the line itself. No quotation marks, no numbering, no commentary."
            }
            Self::CompletionJudgment => "Respond with only \"yes\" or \"no\".",
        }
    }
}

/// What a single prompt asks for, together with the poem state it needs.
#[derive(Debug, Clone, Copy)]
pub enum DirectiveTarget<'a> {
    Title,
    SeedLine { title: &'a str },
    NextLine { poem: &'a PoemState, index: usize },
    CompletionJudgment { poem: &'a PoemState },
}

impl DirectiveTarget<'_> {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Title => RequestKind::Title,
            Self::SeedLine { .. } => RequestKind::SeedLine,
            Self::NextLine { .. } => RequestKind::NextLine,
            Self::CompletionJudgment { .. } => RequestKind::CompletionJudgment,
        }
    }

    /// 1-based index of the line being requested, if a line is requested.
    fn line_index(&self) -> Option<usize> {
        match self {
            Self::SeedLine { .. } => Some(1),
            Self::NextLine { index, .. } => Some(*index),
            Self::Title | Self::CompletionJudgment { .. } => None,
        }
    }
}

/// Renders generation prompts. Holds only the compiled template; all
/// per-run context is passed into [`PromptDirectiveComposer::compose`].
pub struct PromptDirectiveComposer {
    engine: TeraEngine,
}

impl PromptDirectiveComposer {
    pub fn new() -> Result<Self, PromptError> {
        let mut engine = TeraEngine::new();
        engine.add_template(TEMPLATE_NAME, DIRECTIVE_TEMPLATE)?;
        Ok(Self { engine })
    }

    pub fn compose(
        &self,
        target: &DirectiveTarget<'_>,
        ctx: &CompositionContext,
    ) -> Result<String, PromptError> {
        let kind = target.kind();
        let line_index = target.line_index();

        let title = match target {
            DirectiveTarget::SeedLine { title } => *title,
            _ => "",
        };
        let poem = match target {
            DirectiveTarget::NextLine { poem, .. } | DirectiveTarget::CompletionJudgment { poem } => {
                poem.excerpt()
            }
            _ => String::new(),
        };
        let directive = line_index
            .and_then(|index| ctx.style.positional_directive(index))
            .unwrap_or_default();

        let mut tera_ctx = Context::new();
        tera_ctx.insert("kind", kind.template_key());
        tera_ctx.insert("title", title);
        tera_ctx.insert("poem", &poem);
        tera_ctx.insert("line_index", &line_index.unwrap_or_default());
        tera_ctx.insert("user_bio", ctx.user_bio.as_deref().unwrap_or_default());
        tera_ctx.insert("theme", ctx.theme.as_deref().unwrap_or_default());
        tera_ctx.insert("guidance", ctx.guidance.as_deref().unwrap_or_default());
        tera_ctx.insert("style", ctx.style_name.as_deref().unwrap_or_default());
        tera_ctx.insert("rhyme_scheme", ctx.style.rhyme_scheme().unwrap_or_default());
        tera_ctx.insert("directive", &directive);
        tera_ctx.insert("output_format", kind.output_format());

        self.engine.render(TEMPLATE_NAME, &tera_ctx)
    }
}
