//! Persona files: free text describing whose voice the poem is written in.

use crate::config::Config;
use crate::error::PersonaError;
use std::path::PathBuf;

/// Persona file path, in precedence order: explicit flag, then config
/// (which already carries any `VERSECRAFT_PERSONA` override).
pub fn resolve_bio_path(explicit: Option<&str>, config: &Config) -> Option<PathBuf> {
    explicit
        .or(config.persona.bio_path.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
}

/// Read a persona file. Only the surrounding whitespace is trimmed; the text
/// in between is kept as written. An empty file yields `None`.
pub fn load_bio(path: &std::path::Path) -> Result<Option<String>, PersonaError> {
    let raw = std::fs::read_to_string(path).map_err(|source| PersonaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let trimmed = raw.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}
