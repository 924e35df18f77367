//! Blog page: hero, category sidebar, and an empty-state body.

use leptos::prelude::*;

use crate::components::blog_categories::BlogCategories;
use crate::components::blog_hero::BlogHero;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::i18n::{Locale, t};

#[component]
pub fn BlogPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <div class="blog-page">
            <Navbar/>
            <BlogHero/>
            <div class="blog-page__layout">
                <BlogCategories/>
                <section class="blog-page__posts">
                    <p class="blog-page__empty">{move || t(locale.get(), "blog.empty")}</p>
                </section>
            </div>
            <Footer/>
        </div>
    }
}
