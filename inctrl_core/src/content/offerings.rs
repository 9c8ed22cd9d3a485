use super::{Icon, Route};

/// Service card linking to its detail anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    /// Card icon.
    pub icon: Icon,
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
    /// Where "Learn more" points.
    pub route: Route,
}

/// Featured solution with its bullet list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Card icon.
    pub icon: Icon,
    /// Card heading.
    pub title: &'static str,
    /// Bullet points.
    pub features: &'static [&'static str],
}

/// Service overview cards.
pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Shield,
        title: "Security Systems",
        description: "Comprehensive security solutions including CCTV, access control, and intrusion detection systems to protect your assets.",
        route: Route::anchored("/services", "security"),
    },
    Service {
        icon: Icon::Cable,
        title: "Structured Cabling",
        description: "Professional network infrastructure design and installation for voice, data, and video communications.",
        route: Route::anchored("/services", "cabling"),
    },
    Service {
        icon: Icon::Monitor,
        title: "Digital Signage",
        description: "Dynamic digital display solutions for corporate communications, wayfinding, and customer engagement.",
        route: Route::anchored("/services", "signage"),
    },
    Service {
        icon: Icon::Speaker,
        title: "Audio Visual",
        description: "Complete AV integration for conference rooms, auditoriums, and collaborative workspaces.",
        route: Route::anchored("/services", "av"),
    },
    Service {
        icon: Icon::Wrench,
        title: "IT Field Services",
        description: "On-site technical support, equipment installation, and maintenance services nationwide.",
        route: Route::anchored("/services", "field"),
    },
];

/// Featured solutions grid.
pub const SOLUTIONS: &[Solution] = &[
    Solution {
        icon: Icon::Shield,
        title: "Security & Surveillance",
        features: &[
            "4K cameras, IP systems, NVRs",
            "Smart alerts & remote access",
            "Home, retail, office & warehouse solutions",
            "Advanced motion detection & analytics",
        ],
    },
    Solution {
        icon: Icon::Monitor,
        title: "Digital Signage & Displays",
        features: &[
            "Menu boards",
            "Interactive kiosks",
            "Large-format displays",
            "Video walls",
        ],
    },
    Solution {
        icon: Icon::Cable,
        title: "Structured Cabling",
        features: &[
            "CAT5e, CAT6, CAT6a",
            "Fiber optic installation & testing",
            "Rack mounting, patch panels, labeling",
            "Complete network infrastructure",
        ],
    },
    Solution {
        icon: Icon::Speaker,
        title: "Audio Visual",
        features: &[
            "Conference rooms",
            "Commercial speaker systems",
            "PA systems",
            "TV mounting & projector setups",
        ],
    },
    Solution {
        icon: Icon::Wrench,
        title: "IT Field Services",
        features: &[
            "On-site tech support",
            "Nationwide dispatch",
            "Device deployment",
            "Troubleshooting & maintenance",
        ],
    },
];
