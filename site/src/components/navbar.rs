//! Top navigation bar shared by all public pages.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::i18n::{Locale, t};
use crate::util::locale;

/// Site-wide navigation: brand link, page links, and the locale toggle.
#[component]
pub fn Navbar() -> impl IntoView {
    let current = expect_context::<RwSignal<Locale>>();

    let on_toggle = move |_| {
        current.set(locale::toggle(current.get()));
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                {move || t(current.get(), "nav.brand")}
            </a>
            <nav class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="navbar__link" href=link.href>
                                {move || t(current.get(), link.label)}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <button class="navbar__locale" on:click=on_toggle>
                {move || current.get().toggle_label()}
            </button>
        </header>
    }
}
