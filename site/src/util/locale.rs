//! Locale preference persistence and document attributes.
//!
//! Reads the visitor's preferred locale from `localStorage` and mirrors it
//! onto the `<html>` element as `lang`/`dir` attributes. Toggle writes back
//! to `localStorage` and re-applies the attributes. Requires a browser
//! environment; server renders fall back to English.

use crate::i18n::Locale;

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "gulfgate_locale";

/// Read the locale preference from localStorage, defaulting to English.
#[must_use]
pub fn read_preference() -> Locale {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Locale::En,
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(locale) = Locale::parse(&val) {
                    return locale;
                }
            }
        }

        Locale::En
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Locale::En
    }
}

/// Apply `lang` and `dir` attributes on the `<html>` element.
pub fn apply(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("lang", locale.as_str());
                let _ = el.set_attribute("dir", locale.dir());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}

/// Switch to the other locale, apply it, and persist the new preference.
pub fn toggle(current: Locale) -> Locale {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_str());
            }
        }
    }
    next
}
