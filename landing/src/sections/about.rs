use inctrl_core::content::{ABOUT_HIGHLIGHTS, ABOUT_STATS, COMPANY_NAME, Icon};
use leptos::prelude::*;

use super::motion::{Reveal, stagger};
use crate::icons::SvgIcon;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container about-grid">
                <Reveal class="about-copy">
                    <span class="section-eyebrow">"About Us"</span>
                    <h2 class="section-title">"Your Single Source for Technology Installation"</h2>
                    <p class="section-description">
                        {COMPANY_NAME}
                        " brings security, cabling, signage, audio visual and IT field work "
                        "under one roof. Businesses across Central Florida count on us to plan, "
                        "install and maintain the systems they run on."
                    </p>
                    <ul class="highlight-list">
                        {ABOUT_HIGHLIGHTS
                            .iter()
                            .map(|h| {
                                view! {
                                    <li>
                                        <SvgIcon icon=Icon::CheckCircle class="check" />
                                        <span>{*h}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </Reveal>
                <div class="about-stats">
                    {ABOUT_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, s)| {
                            view! {
                                <Reveal delay_ms=stagger(i) class="stat-tile">
                                    <SvgIcon icon=s.icon />
                                    <div class="stat-value">{s.value}</div>
                                    <div class="stat-label">{s.label}</div>
                                </Reveal>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div id="careers" class="container careers">
                <h3>"Careers"</h3>
                <p>
                    "We are always looking for low-voltage technicians and project leads. "
                    "Send your resume through the contact page."
                </p>
            </div>
        </section>
    }
}
