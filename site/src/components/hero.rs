//! Home page hero with the primary call to action.

use leptos::prelude::*;

use crate::i18n::{Locale, t};

/// Landing hero: badge, headline, supporting copy, and a services link.
#[component]
pub fn Hero() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <section class="hero">
            <span class="hero__badge">{move || t(locale.get(), "home.hero.badge")}</span>
            <h1 class="hero__title">{move || t(locale.get(), "home.hero.title")}</h1>
            <p class="hero__body">{move || t(locale.get(), "home.hero.body")}</p>
            <a class="hero__cta" href="/services">
                {move || t(locale.get(), "home.hero.cta")}
            </a>
        </section>
    }
}
