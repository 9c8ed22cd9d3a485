// Static hero with trust badges, used above the services page

use inctrl_core::content::{Icon, TRUST_INDICATORS};
use leptos::prelude::*;

use crate::icons::SvgIcon;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-overlay"></div>
            <div class="container hero-content">
                <span class="hero-eyebrow">"Central Florida's Technology Partner"</span>
                <h1 class="hero-title">
                    "Complete Technology "
                    <span class="accent">"Solutions"</span>
                </h1>
                <p class="hero-description">
                    "Security systems, structured cabling, digital signage, audio visual and "
                    "IT field services. One call, one team, one invoice."
                </p>
                <div class="hero-actions">
                    <a href="/contact" class="btn btn-primary">
                        "Request a Quote"
                        <SvgIcon icon=Icon::ArrowRight />
                    </a>
                    <a href="/portfolio" class="btn btn-outline">"View Our Work"</a>
                </div>
                <div class="trust-indicators">
                    {TRUST_INDICATORS
                        .iter()
                        .map(|t| {
                            view! {
                                <div class="trust-indicator">
                                    <SvgIcon icon=t.icon />
                                    <div>
                                        <div class="trust-value">{t.value}</div>
                                        <div class="trust-label">{t.label}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
