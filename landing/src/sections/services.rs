use inctrl_core::content::{Icon, SERVICES};
use leptos::prelude::*;

use super::motion::{Reveal, stagger};
use crate::icons::SvgIcon;

/// Service overview cards. Each card carries its anchor as `id`, so links
/// such as `/services#cabling` land on it.
#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section services">
            <div class="container">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Our Services"</span>
                    <h2 class="section-title">"Expert Installation, End to End"</h2>
                    <p class="section-description">
                        "From the first site survey to ongoing maintenance."
                    </p>
                </Reveal>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, s)| {
                            view! {
                                <div class="service-anchor" id=s.route.anchor>
                                    <Reveal delay_ms=stagger(i) class="service-card">
                                        <div class="card-icon">
                                            <SvgIcon icon=s.icon />
                                        </div>
                                        <h3 class="card-title">{s.title}</h3>
                                        <p class="card-description">{s.description}</p>
                                        <a href=s.route.href() class="card-link">
                                            "Learn More"
                                            <SvgIcon icon=Icon::ArrowRight />
                                        </a>
                                    </Reveal>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::render;

    #[test]
    fn cards_are_anchored() {
        let html = render(|| view! { <Services /> });
        for s in SERVICES {
            let anchor = s.route.anchor.unwrap_or_default();
            assert!(html.contains(&format!("id=\"{anchor}\"")), "{}", s.title);
            assert!(html.contains(&format!("href=\"/services#{anchor}\"")));
        }
    }
}
