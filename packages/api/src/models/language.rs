//! The two display languages of the application.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Active display locale. Defaults to Khmer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Km,
}

/// Returned when a stored or user-supplied code is neither `"en"` nor `"km"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code {0:?}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Km];

    /// The two-letter code used in storage and URLs.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Km => "km",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "km" => Some(Language::Km),
            _ => None,
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Km,
            Language::Km => Language::En,
        }
    }

    /// Select between an English and a Khmer variant of the same field.
    pub fn pick<'a, T: ?Sized>(self, en: &'a T, km: &'a T) -> &'a T {
        match self {
            Language::En => en,
            Language::Km => km,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
