//! Admin page wrapping dashboard content in the admin shell.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::i18n::{Locale, t};

/// Admin dashboard.
///
/// The logout capability is injected into the layout; wiring it to a real
/// session is left to the embedding deployment, so the in-repo callback is
/// inert.
#[component]
pub fn AdminPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let on_logout = Callback::new(|()| {});

    view! {
        <AdminLayout on_logout=on_logout>
            <section class="admin-overview">
                <h1 class="admin-overview__title">
                    {move || t(locale.get(), "admin.welcome.title")}
                </h1>
                <p class="admin-overview__body">
                    {move || t(locale.get(), "admin.welcome.body")}
                </p>
            </section>
        </AdminLayout>
    }
}
