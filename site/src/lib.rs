//! # site
//!
//! Leptos frontend for the Gulfgate marketing site: public brochure pages,
//! the blog shell, and the admin chrome. Pages compose presentational
//! components top to bottom; every user-facing string resolves through the
//! `i18n` catalog so English and Arabic render from the same templates.

pub mod app;
pub mod components;
pub mod content;
pub mod i18n;
pub mod pages;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
