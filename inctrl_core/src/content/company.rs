use super::Icon;

/// "Why choose us" card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advantage {
    /// Card icon.
    pub icon: Icon,
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
}

/// Animated statistic: counts from zero up to `value` once visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    /// Final number.
    pub value: u32,
    /// Appended after the number (`+`, `%`).
    pub suffix: &'static str,
    /// Caption below the number.
    pub label: &'static str,
}

/// Statistic shown as literal text (About section).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticStat {
    /// Tile icon.
    pub icon: Icon,
    /// Display value, e.g. `24/7`.
    pub value: &'static str,
    /// Caption.
    pub label: &'static str,
}

/// Small badge under the static hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrustIndicator {
    /// Badge icon.
    pub icon: Icon,
    /// Upper line.
    pub label: &'static str,
    /// Emphasised lower line.
    pub value: &'static str,
}

/// Why-choose-us cards.
pub const ADVANTAGES: &[Advantage] = &[
    Advantage {
        icon: Icon::Building,
        title: "Everything Under One Roof",
        description: "Security, cabling, signage, AV & IT, no need to juggle multiple vendors.",
    },
    Advantage {
        icon: Icon::Clock,
        title: "Save Time & Money",
        description: "One team coordinates your entire project from start to finish.",
    },
    Advantage {
        icon: Icon::Shield,
        title: "Licensed & Insured",
        description: "Fully licensed technicians with comprehensive insurance coverage.",
    },
    Advantage {
        icon: Icon::Headphones,
        title: "Dedicated Support",
        description: "Direct communication with your project team, always.",
    },
];

/// Animated counters.
pub const STATS: &[Stat] = &[
    Stat {
        value: 500,
        suffix: "+",
        label: "Projects Completed",
    },
    Stat {
        value: 200,
        suffix: "+",
        label: "Miles Coverage",
    },
    Stat {
        value: 15,
        suffix: "+",
        label: "Years Experience",
    },
    Stat {
        value: 98,
        suffix: "%",
        label: "Client Satisfaction",
    },
];

/// About section tiles.
pub const ABOUT_STATS: &[StaticStat] = &[
    StaticStat {
        icon: Icon::Users,
        value: "500+",
        label: "Projects Completed",
    },
    StaticStat {
        icon: Icon::Clock,
        value: "10+",
        label: "Years Experience",
    },
    StaticStat {
        icon: Icon::Award,
        value: "100%",
        label: "Client Satisfaction",
    },
    StaticStat {
        icon: Icon::CheckCircle,
        value: "24/7",
        label: "Support Available",
    },
];

/// About section checklist.
pub const ABOUT_HIGHLIGHTS: &[&str] = &[
    "Licensed and insured professionals",
    "Transparent pricing with detailed quotes",
    "Nationwide field service coverage",
    "Proactive maintenance and support",
];

/// Badges under the static hero.
pub const TRUST_INDICATORS: &[TrustIndicator] = &[
    TrustIndicator {
        icon: Icon::Shield,
        label: "Licensed & Insured",
        value: "Certified",
    },
    TrustIndicator {
        icon: Icon::Zap,
        label: "Fast Response",
        value: "24/7 Support",
    },
    TrustIndicator {
        icon: Icon::Users,
        label: "Expert Team",
        value: "10+ Years",
    },
];

/// Cities in the service area.
pub const CITIES: &[&str] = &[
    "Orlando",
    "Kissimmee",
    "Winter Park",
    "Clermont",
    "Daytona Beach",
    "Lakeland",
    "Melbourne",
    "Sanford",
    "Tampa",
    "Ocala",
    "Deltona",
    "Altamonte Springs",
    "Apopka",
    "Oviedo",
    "Winter Garden",
    "Lake Mary",
];
