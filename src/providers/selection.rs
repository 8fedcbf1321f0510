//! Picks a model when the user has not named one.

/// Model families in order of preference for short creative generations.
const PREFERRED_FAMILIES: [&str; 8] = [
    "llama3", "llama", "mistral", "gemma", "qwen", "phi", "gpt-4o-mini", "gpt-4o",
];

/// Choose a model from `available`.
///
/// `preferred` wins if the backend serves it, or if the listing is empty (the
/// backend may simply not list models). Otherwise the first model of the
/// highest-ranked family is chosen, falling back to the first listed model.
pub fn select_model(available: &[String], preferred: Option<&str>) -> Option<String> {
    if let Some(preferred) = preferred.map(str::trim).filter(|p| !p.is_empty()) {
        if available.is_empty() || available.iter().any(|m| matches_model(m, preferred)) {
            return Some(preferred.to_string());
        }
        tracing::warn!(model = preferred, "configured model not offered by provider; auto-selecting");
    }

    PREFERRED_FAMILIES
        .iter()
        .find_map(|family| {
            available
                .iter()
                .find(|model| model.to_ascii_lowercase().starts_with(family))
        })
        .or_else(|| available.first())
        .cloned()
}

/// `llama3` matches `llama3:latest`, mirroring Ollama's default tag.
fn matches_model(listed: &str, wanted: &str) -> bool {
    listed == wanted || listed.strip_suffix(":latest") == Some(wanted)
}
