//! Scroll-linked parallax.
//!
//! Two pure pieces, decoupled from any scroll event source:
//!
//! 1. [`scroll_progress`] turns an element's bounding box and the viewport
//!    height into a normalized progress in `[0, 1]`. The range runs from
//!    "element top meets viewport bottom" to "element bottom meets viewport
//!    top".
//! 2. [`Keyframes`] maps that progress to an output value by piecewise
//!    linear interpolation, clamping outside the first and last stop.
//!
//! [`Layer`] pairs a mapping with the CSS property it drives. The layer
//! tables for each section are at the bottom of this module.

/// Linear interpolation between `from` and `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Progress of an element through the viewport, clamped to `[0, 1]`.
///
/// `top` is the element's top edge relative to the viewport (as reported
/// by `getBoundingClientRect`), `height` its height.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }
    ((viewport_height - top) / span).clamp(0.0, 1.0)
}

/// Ordered `(progress, value)` stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes(pub &'static [(f64, f64)]);

impl Keyframes {
    /// Value at `progress`. Below the first stop the first value holds,
    /// above the last stop the last value holds.
    pub fn sample(&self, progress: f64) -> f64 {
        let stops = self.0;
        let Some(&(first_at, first)) = stops.first() else {
            return 0.0;
        };
        if progress.is_nan() || progress <= first_at {
            return first;
        }
        for pair in stops.windows(2) {
            let (a_at, a) = pair[0];
            let (b_at, b) = pair[1];
            if progress <= b_at {
                let width = b_at - a_at;
                if width <= 0.0 {
                    return b;
                }
                return lerp(a, b, (progress - a_at) / width);
            }
        }
        stops.last().map_or(first, |&(_, last)| last)
    }
}

/// What a layer's value is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// `translateY` in percent of the layer's own height.
    TranslateYPercent,
    /// `translateY` in pixels.
    TranslateYPx,
    /// `opacity`.
    Opacity,
    /// Uniform `scale`.
    Scale,
}

/// One decorative layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Driven property.
    pub effect: Effect,
    /// Progress-to-value mapping.
    pub keyframes: Keyframes,
}

impl Layer {
    /// Shorthand for a layer.
    pub const fn new(effect: Effect, stops: &'static [(f64, f64)]) -> Self {
        Self {
            effect,
            keyframes: Keyframes(stops),
        }
    }

    /// Raw value at `progress`.
    pub fn value(&self, progress: f64) -> f64 {
        self.keyframes.sample(progress)
    }

    /// Inline `style` declaration at `progress`.
    pub fn style(&self, progress: f64) -> String {
        let v = self.value(progress);
        match self.effect {
            Effect::TranslateYPercent => format!("transform: translateY({v:.2}%);"),
            Effect::TranslateYPx => format!("transform: translateY({v:.2}px);"),
            Effect::Opacity => format!("opacity: {v:.3};"),
            Effect::Scale => format!("transform: scale({v:.3});"),
        }
    }
}

/// Solutions: background drifts -15% to 15%.
pub const SOLUTIONS_BACKGROUND: Layer =
    Layer::new(Effect::TranslateYPercent, &[(0.0, -15.0), (1.0, 15.0)]);
/// Solutions: floating image rises 80px.
pub const SOLUTIONS_FLOAT: Layer = Layer::new(Effect::TranslateYPx, &[(0.0, 0.0), (1.0, -80.0)]);

/// Why choose us: background drifts -20% to 20%.
pub const WHY_US_BACKGROUND: Layer =
    Layer::new(Effect::TranslateYPercent, &[(0.0, -20.0), (1.0, 20.0)]);
/// Why choose us: grid brightens through the middle of the range.
pub const WHY_US_GRID: Layer = Layer::new(
    Effect::Opacity,
    &[(0.0, 0.1), (0.3, 0.3), (0.7, 0.3), (1.0, 0.1)],
);
/// Why choose us: background image settles from 1.1x to 0.95x.
pub const WHY_US_IMAGE: Layer = Layer::new(Effect::Scale, &[(0.0, 1.1), (0.5, 1.0), (1.0, 0.95)]);

/// Portfolio: background drifts 0% to 15%.
pub const PORTFOLIO_BACKGROUND: Layer =
    Layer::new(Effect::TranslateYPercent, &[(0.0, 0.0), (1.0, 15.0)]);

/// Testimonials: background drifts -10% to 10%.
pub const TESTIMONIALS_BACKGROUND: Layer =
    Layer::new(Effect::TranslateYPercent, &[(0.0, -10.0), (1.0, 10.0)]);

/// Service area: background drifts -10% to 10%.
pub const SERVICE_AREA_BACKGROUND: Layer =
    Layer::new(Effect::TranslateYPercent, &[(0.0, -10.0), (1.0, 10.0)]);
/// Service area: content counter-drifts 5% to -5%.
pub const SERVICE_AREA_CONTENT: Layer =
    Layer::new(Effect::TranslateYPercent, &[(0.0, 5.0), (1.0, -5.0)]);

/// Call to action: geometric pattern drifts 0% to 20%.
pub const CTA_BACKGROUND: Layer = Layer::new(Effect::TranslateYPercent, &[(0.0, 0.0), (1.0, 20.0)]);
/// Call to action: glow peaks mid-range.
pub const CTA_GLOW: Layer = Layer::new(Effect::Opacity, &[(0.0, 0.1), (0.5, 0.3), (1.0, 0.1)]);

/// Every layer table, for sweeping tests.
pub const ALL_LAYERS: &[Layer] = &[
    SOLUTIONS_BACKGROUND,
    SOLUTIONS_FLOAT,
    WHY_US_BACKGROUND,
    WHY_US_GRID,
    WHY_US_IMAGE,
    PORTFOLIO_BACKGROUND,
    TESTIMONIALS_BACKGROUND,
    SERVICE_AREA_BACKGROUND,
    SERVICE_AREA_CONTENT,
    CTA_BACKGROUND,
    CTA_GLOW,
];
