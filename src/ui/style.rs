use console::style;
use std::fmt::Display;

/// White bold: poem titles, section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: line numbers, secondary text
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Green: confirmed values, selected model
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan: field labels
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Yellow: warnings, hints
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}
