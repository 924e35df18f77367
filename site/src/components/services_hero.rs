//! Hero block for the Services listing page.

use leptos::prelude::*;

use crate::i18n::{Locale, t};

#[component]
pub fn ServicesHero() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <section class="services-hero">
            <h1 class="services-hero__title">{move || t(locale.get(), "services.hero.title")}</h1>
            <p class="services-hero__body">{move || t(locale.get(), "services.hero.body")}</p>
        </section>
    }
}
