//! Site display languages.

use serde::{Deserialize, Serialize};

/// The closed set of languages the site can display.
///
/// Language selection affects static UI strings and the partially
/// localized chatbot reply table. Only English, Hindi, and Marathi carry
/// per-topic reply coverage; the remaining languages fall back to a single
/// default string (see the engine's localization policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
    Te,
    Ml,
    Ta,
    Bn,
    Or,
}

impl Language {
    /// All declared languages, in the order the picker presents them.
    pub const ALL: [Self; 8] = [
        Self::En,
        Self::Mr,
        Self::Hi,
        Self::Te,
        Self::Ml,
        Self::Ta,
        Self::Bn,
        Self::Or,
    ];

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
            Self::Te => "te",
            Self::Ml => "ml",
            Self::Ta => "ta",
            Self::Bn => "bn",
            Self::Or => "or",
        }
    }

    /// English name of the language.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Mr => "Marathi",
            Self::Te => "Telugu",
            Self::Ml => "Malayalam",
            Self::Ta => "Tamil",
            Self::Bn => "Bengali",
            Self::Or => "Odia",
        }
    }

    /// Native-script name of the language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
            Self::Mr => "मराठी",
            Self::Te => "తెలుగు",
            Self::Ml => "മലയാളം",
            Self::Ta => "தமிழ்",
            Self::Bn => "বাংলা",
            Self::Or => "ଓଡ଼ିଆ",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| format!("unknown language code: {s}"))
    }
}
