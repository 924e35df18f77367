//! Presentational components.
//!
//! DESIGN
//! ======
//! Every component here is a pure view: zero or a few string inputs in,
//! markup out. Copy resolves through `crate::i18n`; layout classes are
//! fixed literal tokens.

pub mod about_hero;
pub mod admin_layout;
pub mod blog_categories;
pub mod blog_hero;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod service_hero;
pub mod services;
pub mod services_hero;
pub mod testimonials;
