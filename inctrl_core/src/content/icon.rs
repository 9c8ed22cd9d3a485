/// Display icons referenced by the content tables.
///
/// The landing crate maps each variant to an inline SVG; the core only
/// needs a stable name for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Icon {
    Shield,
    Cable,
    Monitor,
    Speaker,
    Wrench,
    Building,
    Clock,
    Headphones,
    Users,
    Award,
    CheckCircle,
    Zap,
    MapPin,
    Truck,
    Phone,
    Mail,
    Quote,
    Star,
    ArrowRight,
    ChevronLeft,
    ChevronRight,
    ExternalLink,
    Linkedin,
    Twitter,
    Facebook,
}

impl Icon {
    /// Kebab-case name, used as a CSS hook (`icon-check-circle`).
    pub fn name(self) -> &'static str {
        match self {
            Icon::Shield => "shield",
            Icon::Cable => "cable",
            Icon::Monitor => "monitor",
            Icon::Speaker => "speaker",
            Icon::Wrench => "wrench",
            Icon::Building => "building",
            Icon::Clock => "clock",
            Icon::Headphones => "headphones",
            Icon::Users => "users",
            Icon::Award => "award",
            Icon::CheckCircle => "check-circle",
            Icon::Zap => "zap",
            Icon::MapPin => "map-pin",
            Icon::Truck => "truck",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::Quote => "quote",
            Icon::Star => "star",
            Icon::ArrowRight => "arrow-right",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
            Icon::ExternalLink => "external-link",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Facebook => "facebook",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(Icon::CheckCircle.name(), "check-circle");
        assert_eq!(Icon::MapPin.name(), "map-pin");
        assert_eq!(Icon::ExternalLink.name(), "external-link");
        assert_eq!(Icon::Shield.name(), "shield");
    }
}
