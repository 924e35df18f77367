//! Services section: one card per catalog entry.

use leptos::prelude::*;

use crate::content::SERVICES;
use crate::i18n::{Locale, t};

/// Service card grid. Each card links to the service's detail page.
#[component]
pub fn Services() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <section class="services">
            <h2 class="services__title">{move || t(locale.get(), "home.services.title")}</h2>
            <p class="services__body">{move || t(locale.get(), "home.services.body")}</p>
            <div class="services__grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <a class="service-card" href=format!("/services/{}", service.slug)>
                                <h3 class="service-card__title">
                                    {move || t(locale.get(), service.title)}
                                </h3>
                                <p class="service-card__summary">
                                    {move || t(locale.get(), service.summary)}
                                </p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
