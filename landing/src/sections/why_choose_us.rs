use inctrl_core::content::{ADVANTAGES, STATS};
use inctrl_core::parallax::{WHY_US_BACKGROUND, WHY_US_GRID, WHY_US_IMAGE};
use leptos::html;
use leptos::prelude::*;

use super::counter::AnimatedCounter;
use super::motion::{ParallaxLayer, Reveal, stagger};
use crate::hooks::use_scroll_progress;
use crate::icons::SvgIcon;

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(section);

    view! {
        <section id="why-us" class="section why-us" node_ref=section>
            <ParallaxLayer progress=progress layer=WHY_US_BACKGROUND class="why-us-bg" />
            <ParallaxLayer progress=progress layer=WHY_US_IMAGE class="why-us-image" />
            <ParallaxLayer progress=progress layer=WHY_US_GRID class="why-us-grid" />
            <div class="container">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Why Choose Us"</span>
                    <h2 class="section-title">"One Partner. Every System."</h2>
                </Reveal>
                <div class="advantages-grid">
                    {ADVANTAGES
                        .iter()
                        .enumerate()
                        .map(|(i, a)| {
                            view! {
                                <Reveal delay_ms=stagger(i) class="advantage-card">
                                    <div class="card-icon">
                                        <SvgIcon icon=a.icon />
                                    </div>
                                    <h3 class="card-title">{a.title}</h3>
                                    <p class="card-description">{a.description}</p>
                                </Reveal>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="stats-row">
                    {STATS
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="stat">
                                    <AnimatedCounter value=s.value suffix=s.suffix />
                                    <div class="stat-label">{s.label}</div>
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
    fn counters_start_at_zero() {
        let html = render(|| view! { <WhyChooseUs /> });
        assert_eq!(html.matches("class=\"counter-value\"").count(), STATS.len());
        assert!(html.contains(">0%<"));
        assert!(html.contains(">0+<"));
        for s in STATS {
            assert!(html.contains(s.label));
        }
    }

    #[test]
    fn every_advantage_is_shown() {
        let html = render(|| view! { <WhyChooseUs /> });
        assert!(html.contains("Licensed &amp; Insured"));
        assert_eq!(html.matches("advantage-card").count(), ADVANTAGES.len());
    }
}
