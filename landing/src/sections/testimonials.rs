use inctrl_core::carousel::Carousel;
use inctrl_core::content::{Icon, TESTIMONIALS, Testimonial};
use inctrl_core::parallax::TESTIMONIALS_BACKGROUND;
use leptos::html;
use leptos::prelude::*;

use super::motion::{ParallaxLayer, Reveal};
use crate::hooks::{Ticker, use_scroll_progress, use_site_config};
use crate::icons::SvgIcon;

fn testimonial_card(t: &'static Testimonial, direction: &'static str) -> impl IntoView {
    view! {
        <blockquote class=format!("testimonial-card {direction}")>
            <SvgIcon icon=Icon::Quote class="quote-mark" />
            <div class="stars" aria-label=format!("{} out of 5 stars", t.stars())>
                {(0..t.stars())
                    .map(|_| view! { <SvgIcon icon=Icon::Star class="star" /> })
                    .collect::<Vec<_>>()}
            </div>
            <p class="testimonial-quote">{t.quote}</p>
            <footer class="testimonial-author">
                <cite>{t.author}</cite>
                <span class="testimonial-role">{t.attribution()}</span>
            </footer>
        </blockquote>
    }
}

/// Client quotes, one at a time. Manual unless the site config sets a
/// testimonial interval.
#[component]
pub fn Testimonials() -> impl IntoView {
    let Some(start) = Carousel::for_items(TESTIMONIALS) else {
        return ().into_any();
    };
    let autoplay = use_site_config().timing.testimonial_interval();
    let carousel = RwSignal::new(start);
    let ticker = Ticker::new();

    if let Some(period) = autoplay {
        Effect::new(move || {
            ticker.start(period, move || carousel.update(Carousel::next));
        });
    }

    let section = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(section);

    let dots = (0..TESTIMONIALS.len())
        .map(|i| {
            view! {
                <button
                    class=move || {
                        if carousel.with(|c| c.is_current(i)) {
                            "testimonial-dot active"
                        } else {
                            "testimonial-dot"
                        }
                    }
                    aria-label=format!("Show testimonial {}", i + 1)
                    on:click=move |_| {
                        carousel.update(|c| {
                            if let Err(e) = c.go_to(i) {
                                tracing::warn!(error = %e, "testimonial jump rejected");
                            }
                        })
                    }
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="testimonials" class="section testimonials" node_ref=section>
            <ParallaxLayer progress=progress layer=TESTIMONIALS_BACKGROUND class="testimonials-bg" />
            <div class="container">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Testimonials"</span>
                    <h2 class="section-title">"What Our Clients Say"</h2>
                </Reveal>
                <div class="testimonial-stage" aria-live="polite">
                    {move || {
                        let c = carousel.get();
                        TESTIMONIALS
                            .get(c.index())
                            .map(|t| testimonial_card(t, c.direction().class()))
                    }}
                </div>
                <div class="testimonial-controls">
                    <button
                        class="testimonial-arrow"
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(Carousel::prev)
                    >
                        <SvgIcon icon=Icon::ChevronLeft />
                    </button>
                    <div class="testimonial-dots">{dots}</div>
                    <button
                        class="testimonial-arrow"
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(Carousel::next)
                    >
                        <SvgIcon icon=Icon::ChevronRight />
                    </button>
                </div>
            </div>
        </section>
    }
    .into_any()
}
