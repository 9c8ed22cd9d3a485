use inctrl_core::content::{Icon, SOLUTIONS};
use inctrl_core::parallax::{SOLUTIONS_BACKGROUND, SOLUTIONS_FLOAT};
use leptos::html;
use leptos::prelude::*;

use super::motion::{ParallaxLayer, Reveal, stagger};
use crate::hooks::use_scroll_progress;
use crate::icons::SvgIcon;

#[component]
pub fn Solutions() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(section);

    view! {
        <section id="solutions" class="section solutions" node_ref=section>
            <ParallaxLayer progress=progress layer=SOLUTIONS_BACKGROUND class="solutions-bg" />
            <ParallaxLayer progress=progress layer=SOLUTIONS_FLOAT class="solutions-float" />
            <div class="container">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"What We Do"</span>
                    <h2 class="section-title">"Integrated Technology Solutions"</h2>
                    <p class="section-description">
                        "Everything your building needs, designed and installed by one team."
                    </p>
                </Reveal>
                <div class="solutions-grid">
                    {SOLUTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, s)| {
                            view! {
                                <Reveal delay_ms=stagger(i) class="solution-card">
                                    <div class="card-icon">
                                        <SvgIcon icon=s.icon />
                                    </div>
                                    <h3 class="card-title">{s.title}</h3>
                                    <ul class="feature-list">
                                        {s
                                            .features
                                            .iter()
                                            .map(|f| {
                                                view! {
                                                    <li>
                                                        <SvgIcon icon=Icon::CheckCircle class="check" />
                                                        <span>{*f}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
