//! Hero block for the Blog page.

use leptos::prelude::*;

use crate::i18n::{Locale, t};

#[component]
pub fn BlogHero() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <section class="blog-hero">
            <h1 class="blog-hero__title">{move || t(locale.get(), "blog.hero.title")}</h1>
            <p class="blog-hero__body">{move || t(locale.get(), "blog.hero.body")}</p>
        </section>
    }
}
