//! Hero block for the About page.

use leptos::prelude::*;

use crate::i18n::{Locale, t};

/// Fixed heading and paragraph introducing the company.
#[component]
pub fn AboutHero() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <section class="about-hero">
            <h1 class="about-hero__title">{move || t(locale.get(), "about.hero.title")}</h1>
            <p class="about-hero__body">{move || t(locale.get(), "about.hero.body")}</p>
        </section>
    }
}
