//! Error type shared by the state machines and the config loader.

use thiserror::Error;

/// Everything that can go wrong in `inctrl-core`.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A carousel needs at least one item to point at.
    #[error("carousel needs at least one item")]
    EmptyCarousel,

    /// `go_to` was asked for a position past the end of the list.
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of items in the carousel.
        len: usize,
    },

    /// Filter slug that is neither `all` nor a known category.
    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    /// The site config could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = SiteError::IndexOutOfRange { index: 7, len: 4 };
        assert_eq!(err.to_string(), "index 7 out of range for 4 items");

        let err = SiteError::UnknownCategory("drones".into());
        assert_eq!(err.to_string(), "unknown category `drones`");
    }
}
