//! Locale-keyed string resolution.
//!
//! Every user-facing string on the site resolves through [`t`]: the active
//! locale's catalog first, then the English catalog, then the key itself.
//! Catalogs are embedded at compile time and parsed once on first lookup.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Locales the site ships.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Every shipped locale, in display order.
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a stored preference. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Text direction for the `dir` attribute on `<html>`.
    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Self::En => "ltr",
            Self::Ar => "rtl",
        }
    }

    /// The other locale.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Label for the locale toggle: names the locale you switch to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::En => "العربية",
            Self::Ar => "English",
        }
    }
}

type Catalog = HashMap<&'static str, &'static str>;

/// Parse `key = value` lines; `#` starts a comment.
fn parse_catalog(content: &'static str) -> Catalog {
    let mut map = Catalog::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim(), value.trim());
        }
    }
    map
}

fn catalog(locale: Locale) -> &'static Catalog {
    static EN: OnceLock<Catalog> = OnceLock::new();
    static AR: OnceLock<Catalog> = OnceLock::new();
    match locale {
        Locale::En => EN.get_or_init(|| parse_catalog(include_str!("../locales/en.ftl"))),
        Locale::Ar => AR.get_or_init(|| parse_catalog(include_str!("../locales/ar.ftl"))),
    }
}

/// Resolve `key` in `locale`, falling back to English, then to the key itself.
#[must_use]
pub fn t(locale: Locale, key: &str) -> String {
    if let Some(value) = catalog(locale).get(key) {
        return (*value).to_string();
    }
    if locale != Locale::En {
        if let Some(value) = catalog(Locale::En).get(key) {
            return (*value).to_string();
        }
    }
    key.to_string()
}
