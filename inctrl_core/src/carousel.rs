//! Cyclic index over a fixed, non-empty list.
//!
//! Backs both the hero slider and the testimonial carousel. Each instance
//! owns its position; two carousels on one page never share state. The
//! auto-advance timer lives in the UI and simply calls [`Carousel::next`],
//! so manual navigation does not reset it.

use std::num::NonZeroUsize;

use crate::error::{Result, SiteError};

/// Which way the last move went; drives the slide-in side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Advanced, or jumped to a later index.
    #[default]
    Forward,
    /// Went back, or jumped to an earlier index.
    Backward,
}

impl Direction {
    /// CSS modifier for the entering slide.
    pub fn class(self) -> &'static str {
        match self {
            Direction::Forward => "from-right",
            Direction::Backward => "from-left",
        }
    }
}

/// Current position in a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: NonZeroUsize,
    direction: Direction,
}

impl Carousel {
    /// Carousel over `len` items, starting at the first.
    pub fn new(len: usize) -> Result<Self> {
        let len = NonZeroUsize::new(len).ok_or(SiteError::EmptyCarousel)?;
        Ok(Self {
            index: 0,
            len,
            direction: Direction::Forward,
        })
    }

    /// Carousel over a slice, `None` when the slice is empty.
    pub fn for_items<T>(items: &[T]) -> Option<Self> {
        Self::new(items.len()).ok()
    }

    /// Current position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Direction of the last move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether `i` is the current position.
    pub fn is_current(&self, i: usize) -> bool {
        self.index == i
    }

    /// Advance one item, wrapping to the first after the last.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len();
        self.direction = Direction::Forward;
        tracing::trace!(index = self.index, "carousel next");
    }

    /// Step back one item, wrapping to the last before the first.
    pub fn prev(&mut self) {
        let len = self.len();
        self.index = (self.index + len - 1) % len;
        self.direction = Direction::Backward;
        tracing::trace!(index = self.index, "carousel prev");
    }

    /// Jump to `index`. Out-of-range requests leave the carousel untouched.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(SiteError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.direction = if index > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = index;
        tracing::trace!(index, "carousel jump");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(Carousel::new(0), Err(SiteError::EmptyCarousel)));
        assert!(Carousel::for_items::<u8>(&[]).is_none());
    }

    #[test]
    fn next_three_times_over_three_slides() {
        let slides = ["A", "B", "C"];
        let mut c = Carousel::for_items(&slides).expect("non-empty");
        let mut seen = Vec::new();
        for _ in 0..3 {
            c.next();
            seen.push(slides[c.index()]);
        }
        assert_eq!(seen, vec!["B", "C", "A"]);
    }

    #[test]
    fn n_steps_return_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut c = Carousel::new(len).expect("non-empty");
                c.go_to(start).expect("in range");
                for _ in 0..len {
                    c.next();
                }
                assert_eq!(c.index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn prev_then_next_is_identity() {
        for len in 1..=7 {
            for start in 0..len {
                let mut c = Carousel::new(len).expect("non-empty");
                c.go_to(start).expect("in range");
                c.prev();
                c.next();
                assert_eq!(c.index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut c = Carousel::new(4).expect("non-empty");
        c.prev();
        assert_eq!(c.index(), 3);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn single_item_stays_put() {
        let mut c = Carousel::new(1).expect("non-empty");
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn go_to_sets_direction_relative_to_current() {
        let mut c = Carousel::new(4).expect("non-empty");
        c.go_to(2).expect("in range");
        assert_eq!(c.direction(), Direction::Forward);
        c.go_to(1).expect("in range");
        assert_eq!(c.direction(), Direction::Backward);
        assert!(c.is_current(1));
    }

    #[test]
    fn go_to_out_of_range_is_rejected_without_moving() {
        let mut c = Carousel::new(4).expect("non-empty");
        c.next();
        let before = c;
        let err = c.go_to(4).unwrap_err();
        assert!(matches!(err, SiteError::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(c, before);
    }
}
