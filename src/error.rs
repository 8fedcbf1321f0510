use std::path::PathBuf;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `Versecraft`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide how to report a failed run; internal plumbing continues to
/// use `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum VerseError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── Persona ─────────────────────────────────────────────────────────
    #[error("persona: {0}")]
    Persona(#[from] PersonaError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    /// A generation call failed. Fatal for the run; nothing is retried.
    #[error("{request} generation failed: {message}")]
    Generation { request: String, message: String },

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("no models available from provider {provider}")]
    NoModels { provider: String },
}

// ─── Prompt / Template errors ───────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template render failed: {0}")]
    Render(String),

    #[error("template registration failed: {0}")]
    Register(String),
}

// ─── Persona errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PersonaError {
    #[error("failed to read persona file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, VerseError>;
