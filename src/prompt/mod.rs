mod directives;
mod engine;

pub use directives::{DirectiveTarget, PromptDirectiveComposer, RequestKind};
pub use engine::TeraEngine;
