// Full-screen hero: rotating service slides with arrows and dots

use inctrl_core::carousel::Carousel;
use inctrl_core::content::{Icon, SLIDES};
use leptos::prelude::*;

use crate::hooks::{Ticker, use_site_config};
use crate::icons::SvgIcon;

fn slide_class(carousel: &Carousel, index: usize) -> String {
    if carousel.is_current(index) {
        format!("hero-slide active {}", carousel.direction().class())
    } else {
        "hero-slide".to_string()
    }
}

#[component]
pub fn HeroSlider() -> impl IntoView {
    let Some(start) = Carousel::for_items(SLIDES) else {
        tracing::warn!("hero slider has no slides");
        return ().into_any();
    };
    let interval = use_site_config().timing.hero_interval();
    let carousel = RwSignal::new(start);
    let ticker = Ticker::new();

    // Manual navigation leaves the timer alone
    Effect::new(move || {
        ticker.start(interval, move || carousel.update(Carousel::next));
    });

    let go_to = move |index: usize| {
        carousel.update(|c| {
            if let Err(e) = c.go_to(index) {
                tracing::warn!(error = %e, "hero slider jump rejected");
            }
        });
    };

    let slides = SLIDES
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let (lead, rest) = slide.title_parts();
            let loading = if i == 0 { "eager" } else { "lazy" };
            view! {
                <div
                    class=move || carousel.with(|c| slide_class(c, i))
                    aria-hidden=move || (!carousel.with(|c| c.is_current(i))).to_string()
                >
                    <img
                        class="hero-slide-image"
                        src=slide.image
                        alt=slide.title
                        loading=loading
                    />
                    <div class="hero-overlay"></div>
                    <div class="container hero-content">
                        <div class="hero-badge">
                            <SvgIcon icon=slide.icon />
                            <span>{slide.subtitle}</span>
                        </div>
                        <h1 class="hero-title">
                            {lead}" "<span class="accent">{rest}</span>
                        </h1>
                        <p class="hero-description">{slide.description}</p>
                        <div class="hero-actions">
                            <a href="/#contact" class="btn btn-primary">
                                "Get a Free Quote"
                                <SvgIcon icon=Icon::ArrowRight />
                            </a>
                            <a href="/#solutions" class="btn btn-outline">"Explore Solutions"</a>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let dots = (0..SLIDES.len())
        .map(|i| {
            view! {
                <button
                    class=move || {
                        if carousel.with(|c| c.is_current(i)) { "hero-dot active" } else { "hero-dot" }
                    }
                    aria-label=format!("Go to slide {}", i + 1)
                    on:click=move |_| go_to(i)
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="home" class="hero-slider" aria-roledescription="carousel">
            {slides}
            <button
                class="hero-arrow hero-arrow-prev"
                aria-label="Previous slide"
                on:click=move |_| carousel.update(Carousel::prev)
            >
                <SvgIcon icon=Icon::ChevronLeft />
            </button>
            <button
                class="hero-arrow hero-arrow-next"
                aria-label="Next slide"
                on:click=move |_| carousel.update(Carousel::next)
            >
                <SvgIcon icon=Icon::ChevronRight />
            </button>
            <div class="hero-dots">{dots}</div>
            <div class="hero-counter">
                {move || format!("{:02} / {:02}", carousel.with(Carousel::index) + 1, SLIDES.len())}
            </div>
        </section>
    }
    .into_any()
}
