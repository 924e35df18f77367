//! Parameterized hero used by individual service pages.

use leptos::prelude::*;

/// Hero block for a single service.
///
/// The three strings are supplied by the caller and rendered verbatim:
/// `subtitle` into the badge, `title` into the heading, `description` into
/// the paragraph. Empty strings render as empty regions.
#[component]
pub fn ServiceHero(title: String, subtitle: String, description: String) -> impl IntoView {
    view! {
        <section class="service-hero">
            <span class="service-hero__badge">{subtitle}</span>
            <h1 class="service-hero__title">{title}</h1>
            <p class="service-hero__description">{description}</p>
        </section>
    }
}
