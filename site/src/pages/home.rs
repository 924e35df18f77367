//! Landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;

/// Home page: navbar, hero, services, testimonials, footer, top to bottom.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>
            <Hero/>
            <Services/>
            <Testimonials/>
            <Footer/>
        </div>
    }
}
