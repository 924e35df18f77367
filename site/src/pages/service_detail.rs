//! Individual service page resolved from the route slug.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::service_hero::ServiceHero;
use crate::content;
use crate::i18n::{Locale, t};

/// Service detail page. Resolves `:slug` against the service catalog and
/// feeds the matched entry's copy into [`ServiceHero`]; unknown slugs get a
/// not-found notice in place of the hero.
#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let params = use_params_map();

    let slug = move || params.read().get("slug").unwrap_or_default();

    view! {
        <div class="service-page">
            <Navbar/>
            {move || match content::find_service(&slug()) {
                Some(service) => {
                    view! {
                        <ServiceHero
                            title=t(locale.get(), service.title)
                            subtitle=t(locale.get(), service.badge)
                            description=t(locale.get(), service.description)
                        />
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <section class="service-page__missing">
                            <p>{t(locale.get(), "services.detail.missing")}</p>
                        </section>
                    }
                        .into_any()
                }
            }}
            <Footer/>
        </div>
    }
}
