//! Site footer: brand blurb, navigation links, copyright line.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::i18n::{Locale, t};

#[component]
pub fn Footer() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__name">{move || t(locale.get(), "nav.brand")}</span>
                <p class="footer__tagline">{move || t(locale.get(), "footer.tagline")}</p>
            </div>
            <nav class="footer__links">
                <span class="footer__links-title">
                    {move || t(locale.get(), "footer.links.title")}
                </span>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="footer__link" href=link.href>
                                {move || t(locale.get(), link.label)}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <p class="footer__rights">{move || t(locale.get(), "footer.rights")}</p>
        </footer>
    }
}
