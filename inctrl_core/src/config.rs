//! Site configuration.
//!
//! The landing crate embeds `site.toml` at compile time and parses it once
//! on startup. Every key is optional; anything missing keeps the default
//! below, which matches the production site.

use std::time::Duration;

use serde::Deserialize;

use crate::content::ContactInfo;
use crate::error::Result;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Carousel, counter and reveal timings.
    pub timing: TimingConfig,
    /// Email and phone used by the contact actions.
    pub contact: ContactConfig,
    /// Document-level settings.
    pub site: PageConfig,
}

/// Animation timings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Hero slider auto-advance period. `0` keeps the default.
    pub hero_interval_ms: u64,
    /// Testimonial auto-advance period. `None` keeps the carousel manual.
    pub testimonial_interval_ms: Option<u64>,
    /// Total length of one counter ramp.
    pub counter_duration_ms: u64,
    /// Number of ticks in one counter ramp.
    pub counter_steps: u32,
    /// Fraction of a counter that must be visible before it starts.
    /// Clamped to `0.0..=1.0` on use.
    pub counter_threshold: f64,
    /// Fraction of a block that must be visible before it fades in.
    /// Clamped to `0.0..=1.0` on use.
    pub reveal_threshold: f64,
}

const DEFAULT_HERO_INTERVAL_MS: u64 = 6000;
const DEFAULT_COUNTER_THRESHOLD: f64 = 0.5;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            hero_interval_ms: DEFAULT_HERO_INTERVAL_MS,
            testimonial_interval_ms: None,
            counter_duration_ms: 2000,
            counter_steps: 60,
            counter_threshold: DEFAULT_COUNTER_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

// IntersectionObserver rejects thresholds outside [0, 1]
fn visible_fraction(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl TimingConfig {
    /// Hero slider period.
    pub fn hero_interval(&self) -> Duration {
        let ms = match self.hero_interval_ms {
            0 => DEFAULT_HERO_INTERVAL_MS,
            ms => ms,
        };
        Duration::from_millis(ms)
    }

    /// Testimonial period, if autoplay is on.
    pub fn testimonial_interval(&self) -> Option<Duration> {
        self.testimonial_interval_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Delay between two counter ticks (`duration / steps`), never below
    /// one millisecond.
    pub fn counter_tick(&self) -> Duration {
        let tick = Duration::from_millis(self.counter_duration_ms) / self.counter_steps.max(1);
        tick.max(Duration::from_millis(1))
    }

    /// Counter visibility threshold for the intersection observer.
    pub fn counter_threshold(&self) -> f64 {
        visible_fraction(self.counter_threshold, DEFAULT_COUNTER_THRESHOLD)
    }

    /// Reveal visibility threshold for the intersection observer.
    pub fn reveal_threshold(&self) -> f64 {
        visible_fraction(self.reveal_threshold, DEFAULT_REVEAL_THRESHOLD)
    }
}

/// Contact details
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address behind the `mailto:` actions.
    pub email: String,
    /// Human-readable phone number; the `tel:` href is derived from it.
    pub phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "info@inctrlts.com".into(),
            phone: "+1 (555) 123-4567".into(),
        }
    }
}

impl ContactConfig {
    /// Borrow as the content-layer contact record.
    pub fn info(&self) -> ContactInfo<'_> {
        ContactInfo {
            email: &self.email,
            phone: &self.phone,
        }
    }
}

/// Document-level settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Canonical URL announced in the document head.
    pub canonical_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canonical_url: "https://inctrl.tech".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a TOML document, falling back to defaults on error.
    pub fn load_or_default(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default site config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn default_matches_production_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.timing.hero_interval(), Duration::from_secs(6));
        assert_eq!(config.timing.testimonial_interval(), None);
        assert_eq!(config.timing.counter_steps, 60);
        assert_eq!(config.timing.counter_tick(), Duration::from_nanos(33_333_333));
        assert_eq!(config.timing.counter_threshold(), 0.5);
        assert_eq!(config.timing.reveal_threshold(), 0.1);
        assert_eq!(config.contact.email, "info@inctrlts.com");
        assert_eq!(config.site.canonical_url, "https://inctrl.tech");
    }

    #[test]
    fn empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").expect("empty toml");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[timing]
hero_interval_ms = 4500
testimonial_interval_ms = 8000

[contact]
phone = "+1 (407) 555-0100"
"#,
        )
        .expect("valid toml");

        assert_eq!(config.timing.hero_interval(), Duration::from_millis(4500));
        assert_eq!(
            config.timing.testimonial_interval(),
            Some(Duration::from_secs(8))
        );
        assert_eq!(config.timing.counter_duration_ms, 2000);
        assert_eq!(config.contact.phone, "+1 (407) 555-0100");
        assert_eq!(config.contact.email, "info@inctrlts.com");
    }

    #[test]
    fn zero_testimonial_interval_means_manual() {
        let config = SiteConfig::from_toml_str("[timing]\ntestimonial_interval_ms = 0\n")
            .expect("valid toml");
        assert_eq!(config.timing.testimonial_interval(), None);
    }

    #[test]
    fn zero_steps_does_not_divide_by_zero() {
        let timing = TimingConfig {
            counter_steps: 0,
            ..TimingConfig::default()
        };
        assert_eq!(timing.counter_tick(), Duration::from_millis(2000));
    }

    #[test]
    fn zero_hero_interval_keeps_the_default() {
        let config =
            SiteConfig::from_toml_str("[timing]\nhero_interval_ms = 0\n").expect("valid toml");
        assert_eq!(config.timing.hero_interval(), Duration::from_secs(6));
    }

    #[test]
    fn counter_tick_keeps_sub_millisecond_precision() {
        let timing = TimingConfig::default();
        let ramp = timing.counter_tick() * timing.counter_steps;
        assert!(ramp > Duration::from_millis(1999), "{ramp:?}");
        assert!(ramp <= Duration::from_millis(2000), "{ramp:?}");

        let instant = TimingConfig {
            counter_duration_ms: 0,
            ..TimingConfig::default()
        };
        assert_eq!(instant.counter_tick(), Duration::from_millis(1));
    }

    #[test]
    fn thresholds_are_clamped_to_a_fraction() {
        let config = SiteConfig::from_toml_str(
            "[timing]\ncounter_threshold = 1.5\nreveal_threshold = -0.2\n",
        )
        .expect("valid toml");
        assert_eq!(config.timing.counter_threshold(), 1.0);
        assert_eq!(config.timing.reveal_threshold(), 0.0);

        let timing = TimingConfig {
            counter_threshold: f64::NAN,
            ..TimingConfig::default()
        };
        assert_eq!(timing.counter_threshold(), 0.5);
    }

    #[test]
    fn invalid_document_is_an_error() {
        let err = SiteConfig::from_toml_str("[timing\nhero_interval_ms = ").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn load_or_default_falls_back() {
        let config = SiteConfig::load_or_default("timing = 12");
        assert_eq!(config, SiteConfig::default());
    }
}
