//! Root application component with routing and the locale context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    about::AboutPage, admin::AdminPage, blog::BlogPage, home::HomePage,
    service_detail::ServiceDetailPage, services::ServicesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the active-locale context and sets up client-side routing.
/// The locale preference is read once on mount and mirrored onto the
/// `<html>` element (`lang`/`dir`) whenever it changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let locale = RwSignal::new(crate::util::locale::read_preference());
    provide_context(locale);

    Effect::new(move || crate::util::locale::apply(locale.get()));

    view! {
        <Stylesheet id="leptos" href="/pkg/gulfgate.css"/>
        <Title text="Gulfgate | Business Setup in the UAE"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=(StaticSegment("services"), ParamSegment("slug")) view=ServiceDetailPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
