//! Fixed category list for the blog sidebar.

use leptos::prelude::*;

use crate::content::BLOG_CATEGORIES;
use crate::i18n::{Locale, t};

#[cfg(test)]
#[path = "blog_categories_test.rs"]
mod blog_categories_test;

/// Resolved category labels, in display order.
#[must_use]
pub fn category_labels(locale: Locale) -> Vec<String> {
    BLOG_CATEGORIES.iter().map(|key| t(locale, key)).collect()
}

/// Category sidebar. Entries link to a placeholder destination; category
/// routes do not exist yet.
#[component]
pub fn BlogCategories() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <aside class="blog-categories">
            <h3 class="blog-categories__title">
                {move || t(locale.get(), "blog.categories.title")}
            </h3>
            <ul class="blog-categories__list">
                {move || {
                    category_labels(locale.get())
                        .into_iter()
                        .map(|label| {
                            view! {
                                <li class="blog-categories__item">
                                    <a class="blog-categories__link" href="#">
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </aside>
    }
}
