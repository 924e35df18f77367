//! About page.

use leptos::prelude::*;

use crate::components::about_hero::AboutHero;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <Navbar/>
            <AboutHero/>
            <Footer/>
        </div>
    }
}
