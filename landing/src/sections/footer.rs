use inctrl_core::content::{
    COMPANY_LINKS, COMPANY_NAME, Icon, Link, SERVICE_LINKS, SOCIAL_LINKS, SUPPORT_LINKS,
};
use leptos::prelude::*;

use crate::hooks::use_site_config;
use crate::icons::SvgIcon;

/// Shown until the browser clock is read.
const FALLBACK_YEAR: u32 = 2025;

fn link_column(title: &'static str, links: &'static [Link]) -> impl IntoView {
    view! {
        <div class="footer-col">
            <h4>{title}</h4>
            <ul>
                {links
                    .iter()
                    .map(|l| view! { <li><a href=l.route.href()>{l.label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let contact = use_site_config().contact;
    let info = contact.info();
    let (mailto, tel) = (info.mailto(), info.tel());
    let (year, set_year) = signal(FALLBACK_YEAR);

    Effect::new(move || set_year.set(js_sys::Date::new_0().get_full_year()));

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href="/" class="nav-logo">"In"<span class="accent">"Ctrl"</span></a>
                    <p>
                        "Security, cabling, digital signage, audio visual and IT field services "
                        "for businesses across Central Florida."
                    </p>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=s.label
                                        class="social-link"
                                    >
                                        <SvgIcon icon=s.icon />
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                {link_column("Services", SERVICE_LINKS)}
                {link_column("Company", COMPANY_LINKS)}
                {link_column("Support", SUPPORT_LINKS)}
                <div class="footer-col footer-contact">
                    <h4>"Contact"</h4>
                    <a href=mailto>
                        <SvgIcon icon=Icon::Mail />
                        {contact.email.clone()}
                    </a>
                    <a href=tel>
                        <SvgIcon icon=Icon::Phone />
                        {contact.phone.clone()}
                    </a>
                    <span>
                        <SvgIcon icon=Icon::MapPin />
                        "Orlando, Central Florida"
                    </span>
                </div>
            </div>
            <div class="footer-bottom">
                <div class="container">
                    <p>{move || format!("© {} {COMPANY_NAME}. All rights reserved.", year.get())}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::render;

    #[test]
    fn social_links_open_in_new_context() {
        let html = render(|| view! { <Footer /> });
        assert_eq!(
            html.matches("rel=\"noopener noreferrer\"").count(),
            SOCIAL_LINKS.len()
        );
        assert_eq!(html.matches("target=\"_blank\"").count(), SOCIAL_LINKS.len());
    }

    #[test]
    fn every_column_link_is_rendered() {
        let html = render(|| view! { <Footer /> });
        for link in SERVICE_LINKS.iter().chain(COMPANY_LINKS).chain(SUPPORT_LINKS) {
            assert!(html.contains(&format!("href=\"{}\"", link.route.href())));
        }
        assert!(html.contains("info@inctrlts.com"));
        assert!(html.contains("© 2025 InCtrl Technology Solutions"));
    }
}
