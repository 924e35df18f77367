//! Client testimonials for the home page.

use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::i18n::{Locale, t};

#[component]
pub fn Testimonials() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <section class="testimonials">
            <h2 class="testimonials__title">
                {move || t(locale.get(), "home.testimonials.title")}
            </h2>
            <div class="testimonials__grid">
                {TESTIMONIALS
                    .iter()
                    .map(|entry| {
                        view! {
                            <figure class="testimonial">
                                <blockquote class="testimonial__quote">
                                    {move || t(locale.get(), entry.quote)}
                                </blockquote>
                                <figcaption class="testimonial__source">
                                    <span class="testimonial__name">{entry.name}</span>
                                    <span class="testimonial__role">
                                        {move || t(locale.get(), entry.role)}
                                    </span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
