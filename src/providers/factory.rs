use super::compatible::OpenAiCompatibleProvider;
use super::ollama::OllamaProvider;
use super::traits::Provider;
use crate::error::LlmError;
use anyhow::Context;
use std::sync::Arc;

/// Hosted OpenAI-compatible backends: `(name, display name, base URL, key env var)`.
const HOSTED: [(&str, &str, &str, &str); 6] = [
    ("openai", "OpenAI", "https://api.openai.com/v1", "OPENAI_API_KEY"),
    ("openrouter", "OpenRouter", "https://openrouter.ai/api/v1", "OPENROUTER_API_KEY"),
    ("groq", "Groq", "https://api.groq.com/openai/v1", "GROQ_API_KEY"),
    ("mistral", "Mistral", "https://api.mistral.ai/v1", "MISTRAL_API_KEY"),
    ("deepseek", "DeepSeek", "https://api.deepseek.com/v1", "DEEPSEEK_API_KEY"),
    ("together", "Together AI", "https://api.together.xyz/v1", "TOGETHER_API_KEY"),
];

/// Names accepted by [`create_provider`].
pub fn known_providers() -> Vec<&'static str> {
    let mut names = vec!["ollama", "compatible"];
    names.extend(HOSTED.iter().map(|(name, ..)| *name));
    names
}

/// Resolve the API key for a provider.
///
/// Resolution order:
/// 1. Explicitly provided `api_key` (trimmed, ignored if empty)
/// 2. Provider-specific environment variable (e.g. `OPENAI_API_KEY`)
/// 3. `VERSECRAFT_API_KEY`
pub fn resolve_api_key(name: &str, explicit_api_key: Option<&str>) -> Option<String> {
    if let Some(key) = explicit_api_key.map(str::trim).filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }

    let provider_env = HOSTED
        .iter()
        .find(|(hosted, ..)| *hosted == name)
        .map(|(.., env_var)| *env_var);

    provider_env
        .into_iter()
        .chain(["VERSECRAFT_API_KEY"])
        .find_map(|env_var| {
            std::env::var(env_var)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
}

/// Build a provider by name. `base_url` overrides the backend's default
/// endpoint and is required for `compatible`.
pub fn create_provider(
    name: &str,
    api_key: Option<&str>,
    base_url: Option<&str>,
) -> anyhow::Result<Arc<dyn Provider>> {
    let name = name.trim().to_ascii_lowercase();
    let api_key = resolve_api_key(&name, api_key);

    if name == "ollama" {
        return Ok(Arc::new(OllamaProvider::new(base_url)));
    }

    if name == "compatible" {
        let base_url = base_url
            .context("provider \"compatible\" needs provider_url (or VERSECRAFT_PROVIDER_URL)")?;
        return Ok(Arc::new(OpenAiCompatibleProvider::new(
            "Compatible",
            base_url,
            api_key.as_deref(),
        )));
    }

    let &(_, display, default_url, _) = HOSTED
        .iter()
        .find(|(hosted, ..)| *hosted == name)
        .ok_or_else(|| LlmError::UnknownProvider(name.clone()))?;

    Ok(Arc::new(OpenAiCompatibleProvider::new(
        display,
        base_url.unwrap_or(default_url),
        api_key.as_deref(),
    )))
}
