//! Structural rules for named poetic forms.
//!
//! A [`StyleRule`] knows two things about its form: how many lines it has (if
//! the form fixes that) and what each line position must do to honour the
//! rhyme scheme and rhythm.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StyleRule {
    #[default]
    FreeVerse,
    Haiku,
    Limerick,
    Sonnet,
    /// A named form without a structural rule. Behaves like free verse but the
    /// name is still passed to the model.
    Custom(String),
}

impl StyleRule {
    /// Resolve a user-supplied style name. Case, spaces and hyphens are
    /// ignored. Missing names and `"random"` resolve to free verse.
    pub fn resolve(name: Option<&str>) -> Self {
        let Some(raw) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Self::FreeVerse;
        };
        let key: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "random" | "freeverse" | "free" => Self::FreeVerse,
            "haiku" => Self::Haiku,
            "limerick" => Self::Limerick,
            "sonnet" => Self::Sonnet,
            _ => Self::Custom(raw.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::FreeVerse => "Free Verse",
            Self::Haiku => "Haiku",
            Self::Limerick => "Limerick",
            Self::Sonnet => "Sonnet",
            Self::Custom(name) => name,
        }
    }

    /// Number of lines the form prescribes, if any.
    pub fn target_length(&self) -> Option<usize> {
        match self {
            Self::Haiku => Some(3),
            Self::Limerick => Some(5),
            Self::Sonnet => Some(14),
            Self::FreeVerse | Self::Custom(_) => None,
        }
    }

    pub fn rhyme_scheme(&self) -> Option<&'static str> {
        match self {
            Self::Limerick => Some("AABBA"),
            Self::Sonnet => Some("ABAB CDCD EFEF GG"),
            Self::FreeVerse | Self::Haiku | Self::Custom(_) => None,
        }
    }

    /// Directive for the line at 1-based `index`, or `None` when the position
    /// carries no structural constraint.
    pub fn positional_directive(&self, index: usize) -> Option<String> {
        match self {
            Self::Haiku => haiku_directive(index).map(ToString::to_string),
            Self::Limerick => limerick_directive(index),
            Self::Sonnet => sonnet_directive(index),
            Self::FreeVerse | Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn haiku_directive(index: usize) -> Option<&'static str> {
    match index {
        2 => Some("7 syllables"),
        3 => Some("5 syllables, concludes the haiku."),
        _ => None,
    }
}

fn limerick_directive(index: usize) -> Option<String> {
    let anchor = match index {
        1 | 2 | 5 => 1,
        3 | 4 => 3,
        _ => return None,
    };
    Some(rhyme_directive(index, anchor, "anapestic rhythm"))
}

fn sonnet_directive(index: usize) -> Option<String> {
    match index {
        1..=12 => {
            // Quatrains rhyme alternately: 1/3, 2/4, 5/7, 6/8, 9/11, 10/12.
            let quatrain_start = (index - 1) / 4 * 4 + 1;
            let anchor = quatrain_start + (index - 1) % 2;
            Some(rhyme_directive(index, anchor, "iambic pentameter"))
        }
        13 => Some("opens the closing couplet, iambic pentameter".to_string()),
        14 => Some("rhymes with line 13, closes the couplet, iambic pentameter".to_string()),
        _ => None,
    }
}

fn rhyme_directive(index: usize, anchor: usize, rhythm: &str) -> String {
    if index == anchor {
        format!("sets the rhyme that later lines answer, {rhythm}")
    } else {
        format!("rhymes with line {anchor}, {rhythm}")
    }
}
