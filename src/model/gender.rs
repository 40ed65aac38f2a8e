//! Gender tags and the string-code registry that resolves them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{RelatedPersonError, Result};

/// Canonical three-valued gender tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[default]
    #[serde(rename = "NA")]
    Unknown,
}

impl Gender {
    /// Canonical label: `M`, `F` or `NA`.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "NA",
        }
    }

    /// True for `Male` and `Female`.
    pub fn is_known(self) -> bool {
        !matches!(self, Gender::Unknown)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = RelatedPersonError;

    fn from_str(s: &str) -> Result<Self> {
        get_gender(s)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Lower-case alias → canonical tag. Lookups are exact after normalization.
pub const GENDER_ALIASES: &[(&str, Gender)] = &[
    ("m", Gender::Male),
    ("male", Gender::Male),
    ("f", Gender::Female),
    ("female", Gender::Female),
    ("na", Gender::Unknown),
    ("unknown", Gender::Unknown),
];

/// Resolve a free-form code (`"Male"`, `"f"`, `"NA"`, ...) to a [`Gender`].
pub fn get_gender(code: &str) -> Result<Gender> {
    let normalized = code.trim().to_lowercase();
    GENDER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, gender)| *gender)
        .ok_or_else(|| RelatedPersonError::UnknownGenderCode {
            code: code.to_string(),
            mappings: genders_string_mappings(),
        })
}

/// Render the alias table, e.g. `'m' -> 'M', 'male' -> 'M', 'f' -> 'F', ...`.
pub fn genders_string_mappings() -> String {
    GENDER_ALIASES
        .iter()
        .map(|(alias, gender)| format!("'{alias}' -> '{}'", gender.label()))
        .collect::<Vec<_>>()
        .join(", ")
}
