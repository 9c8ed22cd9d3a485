//! Edge-triggered one-shot latch.
//!
//! Viewport effects (counters, fade-ins) must fire the first time their
//! element becomes visible and never again, even when the user scrolls away
//! and back. The intersection observer feeds every visibility report into a
//! [`OnceLatch`]; only the first false-to-true edge comes out as `true`.

/// Fires once, on the first transition into visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    /// Unfired latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the latch has already fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feed a visibility report. Returns `true` exactly once: for the first
    /// report with `visible == true`.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_across_toggles() {
        let mut latch = OnceLatch::new();
        let reports = [false, false, true, false, true, true, false, true];
        let fired: Vec<bool> = reports.iter().map(|&v| latch.observe(v)).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[2]);
        assert!(latch.has_fired());
    }

    #[test]
    fn fires_on_first_report_when_already_visible() {
        let mut latch = OnceLatch::new();
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
    }

    #[test]
    fn never_fires_while_hidden() {
        let mut latch = OnceLatch::new();
        for _ in 0..5 {
            assert!(!latch.observe(false));
        }
        assert!(!latch.has_fired());
    }
}
