//! # inctrl-core
//!
//! Framework-independent pieces of the InCtrl landing site.
//!
//! Everything the page shows comes from the static tables in [`content`];
//! everything the page *does* is one of a handful of small state machines
//! that live here so they can be tested without a browser:
//!
//! - [`carousel`] - cyclic slide index (hero slider, testimonials)
//! - [`gallery`] - category filter over the portfolio
//! - [`counter`] - linear ramp behind the animated statistics
//! - [`trigger`] - one-shot latch for viewport-entry effects
//! - [`parallax`] - scroll progress and interpolation for background layers
//!
//! [`config`] holds the tunable timings and contact details, [`error`] the
//! crate error type.
//!
//! ```rust
//! use inctrl_core::carousel::Carousel;
//! use inctrl_core::content::SLIDES;
//!
//! let mut slider = Carousel::for_items(SLIDES).unwrap();
//! slider.next();
//! assert_eq!(SLIDES[slider.index()].title, "Structured Cabling");
//! ```

#![warn(missing_docs)]

pub mod carousel;
pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod gallery;
pub mod parallax;
pub mod trigger;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
