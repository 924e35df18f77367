//! Services listing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::services::Services;
use crate::components::services_hero::ServicesHero;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="services-page">
            <Navbar/>
            <ServicesHero/>
            <Services/>
            <Footer/>
        </div>
    }
}
