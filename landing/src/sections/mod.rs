// Landing page sections

mod about;
mod counter;
mod cta;
mod footer;
mod hero;
mod hero_slider;
mod motion;
mod nav;
mod portfolio;
mod seo;
mod service_area;
mod services;
mod solutions;
mod testimonials;
mod why_choose_us;

pub use about::About;
pub use cta::Cta;
pub use footer::Footer;
pub use hero::Hero;
pub use hero_slider::HeroSlider;
pub use nav::Nav;
pub use portfolio::Portfolio;
pub use seo::{PageTitle, SeoMeta};
pub use service_area::ServiceArea;
pub use services::Services;
pub use solutions::Solutions;
pub use testimonials::Testimonials;
pub use why_choose_us::WhyChooseUs;

/// Render a view to HTML under a fresh owner, the way the page would be
/// served before hydration. Effects do not run, so nothing reaches for
/// `window`.
#[cfg(test)]
pub(crate) fn render<V, F>(f: F) -> String
where
    F: FnOnce() -> V,
    V: leptos::tachys::view::RenderHtml,
{
    use leptos::prelude::Owner;

    let owner = Owner::new();
    owner.with(|| f().to_html())
}
