use inctrl_core::content::Icon;
use inctrl_core::parallax::{CTA_BACKGROUND, CTA_GLOW};
use leptos::html;
use leptos::prelude::*;

use super::motion::{ParallaxLayer, Reveal};
use crate::hooks::{use_scroll_progress, use_site_config};
use crate::icons::SvgIcon;

/// Closing call to action; email and phone come from the site config.
#[component]
pub fn Cta() -> impl IntoView {
    let contact = use_site_config().contact;
    let info = contact.info();
    let (mailto, tel) = (info.mailto(), info.tel());

    let section = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(section);

    view! {
        <section id="contact" class="section cta" node_ref=section>
            <ParallaxLayer progress=progress layer=CTA_BACKGROUND class="cta-pattern" />
            <ParallaxLayer progress=progress layer=CTA_GLOW class="cta-glow" />
            <div class="container">
                <Reveal class="cta-content">
                    <h2 class="cta-title">"Ready to Upgrade Your Technology?"</h2>
                    <p class="cta-description">
                        "Get a free consultation and quote. One call covers security, cabling, "
                        "signage, AV and IT."
                    </p>
                    <div class="cta-actions">
                        <a href=mailto class="btn btn-primary btn-lg">
                            <SvgIcon icon=Icon::Mail />
                            "Get a Free Quote"
                        </a>
                        <a href=tel class="btn btn-outline btn-lg">
                            <SvgIcon icon=Icon::Phone />
                            {contact.phone.clone()}
                        </a>
                    </div>
                    <p class="cta-note">"Licensed & insured. Serving Central Florida and beyond."</p>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::render;
    use inctrl_core::SiteConfig;

    #[test]
    fn default_contact_links() {
        let html = render(|| view! { <Cta /> });
        assert!(html.contains("href=\"mailto:info@inctrlts.com\""));
        assert!(html.contains("href=\"tel:+15551234567\""));
        assert!(html.contains("+1 (555) 123-4567"));
    }

    #[test]
    fn contact_follows_context_config() {
        let html = render(|| {
            let config = SiteConfig::from_toml_str(
                "[contact]\nemail = \"sales@example.com\"\nphone = \"407-555-0100\"\n",
            )
            .unwrap();
            provide_context(config);
            view! { <Cta /> }
        });
        assert!(html.contains("href=\"mailto:sales@example.com\""));
        assert!(html.contains("href=\"tel:4075550100\""));
    }
}
