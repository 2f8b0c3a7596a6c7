//! Theme and language preferences persisted in local storage.

use std::fmt;
use std::str::FromStr;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Elements carrying `data-translate` with one of these keys get their text
/// swapped on a language change.
pub const TRANSLATION_KEYS: [&str; 7] = [
    "nav-home",
    "nav-ranks",
    "nav-training",
    "nav-fitness",
    "nav-gallery",
    "nav-join",
    "nav-login",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon class for the theme toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Value for the document `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Hi => "rtl",
            Language::En => "ltr",
        }
    }

    /// The toggle offers the other language, named in that language.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "हिंदी",
            Language::Hi => "English",
        }
    }

    pub fn translate(self, key: &str) -> Option<&'static str> {
        let text = match (self, key) {
            (Language::En, "nav-home") => "Home",
            (Language::En, "nav-ranks") => "Ranks",
            (Language::En, "nav-training") => "Training",
            (Language::En, "nav-fitness") => "Fitness",
            (Language::En, "nav-gallery") => "Gallery",
            (Language::En, "nav-join") => "Join Army",
            (Language::En, "nav-login") => "Login",
            (Language::Hi, "nav-home") => "होम",
            (Language::Hi, "nav-ranks") => "रैंक",
            (Language::Hi, "nav-training") => "प्रशिक्षण",
            (Language::Hi, "nav-fitness") => "फिटनेस",
            (Language::Hi, "nav-gallery") => "गैलरी",
            (Language::Hi, "nav-join") => "आर्मी जॉइन करें",
            (Language::Hi, "nav-login") => "लॉगिन",
            _ => return None,
        };
        Some(text)
    }

    /// Every `(key, text)` pair for this language.
    pub fn translations(self) -> impl Iterator<Item = (&'static str, &'static str)> {
        TRANSLATION_KEYS
            .into_iter()
            .filter_map(move |key| self.translate(key).map(|text| (key, text)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            other => Err(format!("Unknown language: {}", other)),
        }
    }
}
