use std::fmt;
use std::str::FromStr;

use super::Icon;
use crate::error::SiteError;
use crate::gallery::{Categorized, Filter};

/// Closed set of project categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Cameras, access control, intrusion detection.
    Security,
    /// Copper and fiber infrastructure.
    Cabling,
    /// Displays, menu boards, video walls.
    Signage,
    /// Audio visual installations.
    Av,
    /// IT field services.
    It,
}

impl Category {
    /// Every category, in filter-bar order.
    pub const ALL: [Category; 5] = [
        Category::Security,
        Category::Cabling,
        Category::Signage,
        Category::Av,
        Category::It,
    ];

    /// Stable lowercase identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Security => "security",
            Category::Cabling => "cabling",
            Category::Signage => "signage",
            Category::Av => "av",
            Category::It => "it",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SiteError::UnknownCategory(s.to_string()))
    }
}

/// Portfolio card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    /// Stable identifier, also the list key.
    pub id: u32,
    /// Card heading.
    pub title: &'static str,
    /// Filter tag.
    pub category: Category,
    /// One-line summary.
    pub description: &'static str,
    /// Cover image URL.
    pub image: &'static str,
}

impl Categorized for Project {
    fn category(&self) -> Category {
        self.category
    }
}

/// Filter-bar button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryOption {
    /// Filter applied on click.
    pub filter: Filter,
    /// Button label.
    pub label: &'static str,
    /// Leading icon; the "all" button has none.
    pub icon: Option<Icon>,
}

/// Filter bar, in display order.
pub const CATEGORY_OPTIONS: &[CategoryOption] = &[
    CategoryOption {
        filter: Filter::All,
        label: "All Projects",
        icon: None,
    },
    CategoryOption {
        filter: Filter::Only(Category::Security),
        label: "Security",
        icon: Some(Icon::Shield),
    },
    CategoryOption {
        filter: Filter::Only(Category::Cabling),
        label: "Cabling",
        icon: Some(Icon::Cable),
    },
    CategoryOption {
        filter: Filter::Only(Category::Signage),
        label: "Signage",
        icon: Some(Icon::Monitor),
    },
    CategoryOption {
        filter: Filter::Only(Category::Av),
        label: "Audio Visual",
        icon: Some(Icon::Speaker),
    },
    CategoryOption {
        filter: Filter::Only(Category::It),
        label: "IT Services",
        icon: Some(Icon::Wrench),
    },
];

/// Recent projects, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Retail Store Security System",
        category: Category::Security,
        description: "Complete 16-camera 4K surveillance system with remote monitoring",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=600&h=400&fit=crop",
    },
    Project {
        id: 2,
        title: "Corporate Network Infrastructure",
        category: Category::Cabling,
        description: "CAT6a structured cabling for 200+ workstations",
        image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?w=600&h=400&fit=crop",
    },
    Project {
        id: 3,
        title: "Restaurant Digital Menu Boards",
        category: Category::Signage,
        description: "4-screen digital menu system with content management",
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=600&h=400&fit=crop",
    },
    Project {
        id: 4,
        title: "Conference Room AV Setup",
        category: Category::Av,
        description: "Full video conferencing system with 85\" display",
        image: "https://images.unsplash.com/photo-1497366216548-37526070297c?w=600&h=400&fit=crop",
    },
    Project {
        id: 5,
        title: "Warehouse Surveillance",
        category: Category::Security,
        description: "32-camera system with license plate recognition",
        image: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=600&h=400&fit=crop",
    },
    Project {
        id: 6,
        title: "Data Center Cabling",
        category: Category::Cabling,
        description: "Fiber optic backbone with complete cable management",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=600&h=400&fit=crop",
    },
    Project {
        id: 7,
        title: "Shopping Mall Video Wall",
        category: Category::Signage,
        description: "12-panel video wall with dynamic content",
        image: "https://images.unsplash.com/photo-1567449303078-57ad995bd17a?w=600&h=400&fit=crop",
    },
    Project {
        id: 8,
        title: "Hotel PA System",
        category: Category::Av,
        description: "Multi-zone audio system covering 150+ rooms",
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=600&h=400&fit=crop",
    },
    Project {
        id: 9,
        title: "Nationwide Device Rollout",
        category: Category::It,
        description: "500+ POS terminal deployments across 12 states",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
    },
];
