use inctrl_core::content::{CITIES, Icon};
use inctrl_core::parallax::{SERVICE_AREA_BACKGROUND, SERVICE_AREA_CONTENT};
use leptos::html;
use leptos::prelude::*;

use super::motion::{ParallaxLayer, Reveal};
use crate::hooks::use_scroll_progress;
use crate::icons::SvgIcon;

/// Delay step for the city chips; tighter than the card stagger.
const CITY_STAGGER_MS: u32 = 50;

#[component]
pub fn ServiceArea() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(section);

    view! {
        <section id="service-area" class="section service-area" node_ref=section>
            <ParallaxLayer progress=progress layer=SERVICE_AREA_BACKGROUND class="service-area-bg" />
            <ParallaxLayer progress=progress layer=SERVICE_AREA_CONTENT class="container service-area-content">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Service Area"</span>
                    <h2 class="section-title">"Proudly Serving Central Florida"</h2>
                    <p class="section-description">
                        "Based in Orlando with a 200+ mile service radius, plus nationwide IT field services."
                    </p>
                </Reveal>
                <ul class="city-list">
                    {CITIES
                        .iter()
                        .zip(0_u32..)
                        .map(|(city, i)| {
                            view! {
                                <li>
                                    <Reveal delay_ms={i * CITY_STAGGER_MS} class="city-chip">
                                        <SvgIcon icon=Icon::MapPin />
                                        <span>{*city}</span>
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="coverage-note">
                    <SvgIcon icon=Icon::Truck />
                    <span>"Don't see your city? We travel. Ask us about your location."</span>
                </div>
            </ParallaxLayer>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::render;

    #[test]
    fn lists_every_city() {
        let html = render(|| view! { <ServiceArea /> });
        for city in CITIES {
            assert!(html.contains(city), "{city}");
        }
        assert_eq!(html.matches("data-icon=\"map-pin\"").count(), CITIES.len());
    }

    #[test]
    fn content_layer_counter_drifts() {
        let html = render(|| view! { <ServiceArea /> });
        assert!(html.contains("translateY(-10.00%)"));
        assert!(html.contains("translateY(5.00%)"));
    }
}
