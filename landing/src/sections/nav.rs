use inctrl_core::content::{COMPANY_NAME, Icon, NAV_LINKS};
use leptos::prelude::*;

use crate::hooks::use_site_config;
use crate::icons::SvgIcon;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let contact = use_site_config().contact;
    let tel = contact.info().tel();
    let drawer_tel = tel.clone();

    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a href=link.route.href() class=class on:click=move |_| set_menu_open.set(false)>
                        {link.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="/" class="nav-brand" aria-label=COMPANY_NAME>
                    <span class="nav-logo">"In"<span class="accent">"Ctrl"</span></span>
                    <span class="nav-tagline">"Technology Solutions"</span>
                </a>
                <div class="nav-links">{links("nav-link")}</div>
                <div class="nav-actions">
                    <a href=tel class="nav-phone">
                        <SvgIcon icon=Icon::Phone />
                        <span>{contact.phone.clone()}</span>
                    </a>
                    <a href="/#contact" class="btn btn-primary nav-cta">"Get a Quote"</a>
                </div>
                <button
                    class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            // Mobile drawer
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {links("nav-drawer-link")}
                    <a href=drawer_tel.clone() class="nav-drawer-link">
                        <SvgIcon icon=Icon::Phone />
                        " Call Us"
                    </a>
                    <a
                        href="/#contact"
                        class="btn btn-primary"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "Get a Quote"
                    </a>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::render;

    #[test]
    fn links_point_at_home_anchors() {
        let html = render(|| view! { <Nav /> });
        for link in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.route.href())));
            assert!(html.contains(link.label));
        }
        assert!(html.contains("href=\"tel:+15551234567\""));
    }

    #[test]
    fn drawer_is_closed_initially() {
        let html = render(|| view! { <Nav /> });
        assert!(!html.contains("nav-drawer"));
        assert!(html.contains("aria-expanded=\"false\""));
    }
}
