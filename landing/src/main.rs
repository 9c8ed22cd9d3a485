// InCtrl Technology Solutions landing site - Leptos 0.8, client-side rendered

mod hooks;
mod icons;
mod logging;
mod pages;
mod sections;

use inctrl_core::SiteConfig;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::*;
use sections::{Footer, Nav};

/// Site settings, embedded at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = SiteConfig::load_or_default(SITE_TOML);
    tracing::info!(
        hero_interval_ms = config.timing.hero_interval_ms,
        testimonials_autoplay = config.timing.testimonial_interval().is_some(),
        "mounting landing page"
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/portfolio") view=PortfolioPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_settings_parse() {
        let config = SiteConfig::from_toml_str(SITE_TOML).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
