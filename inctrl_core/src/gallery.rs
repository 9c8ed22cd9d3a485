//! Category filter over the portfolio.
//!
//! The gallery never touches its items; it only remembers which filter is
//! selected and re-derives the visible list on demand.

use crate::content::Category;
use crate::error::Result;

/// Anything that carries a category tag.
pub trait Categorized {
    /// The item's tag.
    fn category(&self) -> Category;
}

/// Filter selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// No filtering.
    #[default]
    All,
    /// Only items tagged with this category.
    Only(Category),
}

impl Filter {
    /// Whether `category` passes the filter.
    pub fn admits(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(selected) => selected == category,
        }
    }

    /// `"all"` or the category slug.
    pub fn slug(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.slug(),
        }
    }

    /// Parse `"all"` or a category slug.
    pub fn from_slug(slug: &str) -> Result<Self> {
        if slug.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        Ok(Filter::Only(slug.parse()?))
    }
}

/// Ordered items plus the selected filter.
#[derive(Debug, Clone, Copy)]
pub struct Gallery<'a, T> {
    items: &'a [T],
    filter: Filter,
}

impl<'a, T: Categorized> Gallery<'a, T> {
    /// Gallery showing everything.
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            filter: Filter::All,
        }
    }

    /// Selected filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Change the selection. Items are untouched.
    pub fn set_filter(&mut self, filter: Filter) {
        tracing::debug!(filter = filter.slug(), "gallery filter");
        self.filter = filter;
    }

    /// Change the selection by slug; unknown slugs keep the current one.
    pub fn set_filter_slug(&mut self, slug: &str) -> Result<()> {
        let filter = Filter::from_slug(slug)?;
        self.set_filter(filter);
        Ok(())
    }

    /// Matching items, in original order.
    pub fn filtered(&self) -> Vec<&'a T> {
        filter_items(self.items, self.filter)
    }
}

/// Matching items, in original order. Pure; [`Gallery::filtered`] is this
/// applied to the gallery's own state.
pub fn filter_items<T: Categorized>(items: &[T], filter: Filter) -> Vec<&T> {
    items
        .iter()
        .filter(|item| filter.admits(item.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use crate::error::SiteError;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    struct Item(u32, Category);

    impl Categorized for Item {
        fn category(&self) -> Category {
            self.1
        }
    }

    #[test]
    fn selecting_security_keeps_order() {
        let items = [
            Item(1, Category::Security),
            Item(2, Category::Cabling),
            Item(3, Category::Security),
        ];
        let mut gallery = Gallery::new(&items);
        gallery.set_filter(Filter::Only(Category::Security));

        let ids: Vec<u32> = gallery.filtered().iter().map(|i| i.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn all_returns_full_list_in_order() {
        let gallery = Gallery::new(PROJECTS);
        let ids: Vec<u32> = gallery.filtered().iter().map(|p| p.id).collect();
        let expected: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn every_filtered_item_matches_and_order_is_preserved() {
        for category in Category::ALL {
            let result = filter_items(PROJECTS, Filter::Only(category));
            assert!(!result.is_empty());
            assert!(result.iter().all(|p| p.category == category));
            assert!(result.windows(2).all(|w| w[0].id < w[1].id));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut gallery = Gallery::new(PROJECTS);
        gallery.set_filter(Filter::Only(Category::Av));
        let first = gallery.filtered();
        let second = gallery.filtered();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn slug_selection() {
        let mut gallery = Gallery::new(PROJECTS);
        gallery.set_filter_slug("signage").expect("known slug");
        assert_eq!(gallery.filter(), Filter::Only(Category::Signage));

        let err = gallery.set_filter_slug("drones").unwrap_err();
        assert!(matches!(err, SiteError::UnknownCategory(_)));
        assert_eq!(gallery.filter(), Filter::Only(Category::Signage));

        gallery.set_filter_slug("ALL").expect("all");
        assert_eq!(gallery.filter(), Filter::All);
    }

    #[test]
    fn filter_slug_round_trips_through_from_slug() {
        assert_eq!(Filter::from_slug(Filter::All.slug()).unwrap(), Filter::All);
        let it = Filter::Only(Category::It);
        assert_eq!(Filter::from_slug(it.slug()).unwrap(), it);
    }
}
