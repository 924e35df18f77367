//! Fixed chrome for admin pages: a top bar plus a content container.

use leptos::prelude::*;

use crate::i18n::{Locale, t};

/// Wraps arbitrary admin content with the dashboard top bar.
///
/// The content region passes through unchanged. The logout control fires
/// `on_logout`; session teardown is owned by the caller.
#[component]
pub fn AdminLayout(on_logout: Callback<()>, children: Children) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <div class="admin-layout">
            <header class="admin-layout__bar">
                <span class="admin-layout__title">{move || t(locale.get(), "admin.title")}</span>
                <div class="admin-layout__session">
                    <span class="admin-layout__user">{move || t(locale.get(), "admin.user")}</span>
                    <button class="admin-layout__logout" on:click=move |_| on_logout.run(())>
                        {move || t(locale.get(), "admin.logout")}
                    </button>
                </div>
            </header>
            <main class="admin-layout__content">{children()}</main>
        </div>
    }
}
