// Scroll-driven building blocks shared by the sections

use inctrl_core::parallax::Layer;
use leptos::html;
use leptos::prelude::*;

use crate::hooks::{use_revealed, use_site_config};

/// Stagger step between sibling reveals.
pub const STAGGER_MS: u32 = 100;

/// Delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(STAGGER_MS)
}

fn reveal_class(base: &str, revealed: bool) -> String {
    let mut class = String::from("reveal");
    if !base.is_empty() {
        class.push(' ');
        class.push_str(base);
    }
    if revealed {
        class.push_str(" visible");
    }
    class
}

/// Fades its children in the first time they scroll into view. The
/// `visible` class is never taken away again.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let threshold = use_site_config().timing.reveal_threshold();
    let node = NodeRef::<html::Div>::new();
    let revealed = use_revealed(node, threshold);
    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms;"));

    view! {
        <div node_ref=node class=move || reveal_class(&class, revealed.get()) style=style>
            {children()}
        </div>
    }
}

/// Decorative layer whose inline style follows the section's scroll
/// progress through `layer`.
#[component]
pub fn ParallaxLayer(
    #[prop(into)] progress: Signal<f64>,
    layer: Layer,
    #[prop(optional, into)] class: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let decorative = children.is_none().then_some("true");
    let class = if class.is_empty() {
        "parallax-layer".to_string()
    } else {
        format!("parallax-layer {class}")
    };

    view! {
        <div
            class=class
            aria-hidden=decorative
            style=move || layer.style(progress.get())
        >
            {children.map(|c| c())}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::sections::render;
    use inctrl_core::parallax::{CTA_GLOW, PORTFOLIO_BACKGROUND};

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(3), 300);
    }

    #[test]
    fn reveal_class_only_gains_visible() {
        assert_eq!(reveal_class("", false), "reveal");
        assert_eq!(reveal_class("card", false), "reveal card");
        assert_eq!(reveal_class("card", true), "reveal card visible");
    }

    #[test]
    fn reveal_starts_hidden() {
        let html = render(|| {
            view! {
                <Reveal delay_ms=200 class="card">
                    <p>"Hello"</p>
                </Reveal>
            }
        });
        assert!(html.contains("class=\"reveal card\""));
        assert!(html.contains("transition-delay: 200ms;"));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn parallax_layer_styles_from_progress() {
        let html = render(|| {
            let (progress, _) = signal(1.0);
            view! { <ParallaxLayer progress=progress layer=PORTFOLIO_BACKGROUND class="bg" /> }
        });
        assert!(html.contains("translateY(15.00%)"));
        assert!(html.contains("aria-hidden=\"true\""));

        let html = render(|| {
            let (progress, _) = signal(0.5);
            view! {
                <ParallaxLayer progress=progress layer=CTA_GLOW>
                    <span>"glow"</span>
                </ParallaxLayer>
            }
        });
        assert!(html.contains("opacity: 0.300;"));
        assert!(!html.contains("aria-hidden"));
    }
}
