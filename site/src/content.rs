//! Fixed display data: the service catalog, testimonials, blog categories,
//! and navigation links.
//!
//! Text fields hold catalog keys for [`crate::i18n::t`]; only slugs, hrefs,
//! and proper nouns are literal. Entries are constructed per render and
//! never mutated.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// One entry in the service catalog.
#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub badge: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
}

/// The service catalog, in display order.
pub static SERVICES: [Service; 6] = [
    Service {
        slug: "company-formation",
        title: "services.formation.title",
        badge: "services.formation.badge",
        summary: "services.formation.summary",
        description: "services.formation.description",
    },
    Service {
        slug: "free-zone-setup",
        title: "services.freezone.title",
        badge: "services.freezone.badge",
        summary: "services.freezone.summary",
        description: "services.freezone.description",
    },
    Service {
        slug: "tax-compliance",
        title: "services.tax.title",
        badge: "services.tax.badge",
        summary: "services.tax.summary",
        description: "services.tax.description",
    },
    Service {
        slug: "corporate-banking",
        title: "services.banking.title",
        badge: "services.banking.badge",
        summary: "services.banking.summary",
        description: "services.banking.description",
    },
    Service {
        slug: "visa-services",
        title: "services.visa.title",
        badge: "services.visa.badge",
        summary: "services.visa.summary",
        description: "services.visa.description",
    },
    Service {
        slug: "accounting",
        title: "services.accounting.title",
        badge: "services.accounting.badge",
        summary: "services.accounting.summary",
        description: "services.accounting.description",
    },
];

/// Find a catalog entry by its URL slug.
#[must_use]
pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.slug == slug)
}

/// A client testimonial. `name` is a proper noun and stays literal; the
/// quote and role resolve through the catalog.
#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// Home page testimonials, in display order.
pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "testimonials.almansouri.quote",
        name: "Sara Al Mansouri",
        role: "testimonials.almansouri.role",
    },
    Testimonial {
        quote: "testimonials.okafor.quote",
        name: "Daniel Okafor",
        role: "testimonials.okafor.role",
    },
    Testimonial {
        quote: "testimonials.nair.quote",
        name: "Priya Nair",
        role: "testimonials.nair.role",
    },
];

/// Blog sidebar categories, in display order.
pub static BLOG_CATEGORIES: [&str; 6] = [
    "blog.categories.business-setup",
    "blog.categories.tax-compliance",
    "blog.categories.free-zones",
    "blog.categories.banking",
    "blog.categories.legal",
    "blog.categories.insights",
];

/// One primary navigation entry; the label is a catalog key.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Primary navigation, shared by the navbar and footer.
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "/", label: "nav.home" },
    NavLink { href: "/about", label: "nav.about" },
    NavLink { href: "/services", label: "nav.services" },
    NavLink { href: "/blog", label: "nav.blog" },
];
