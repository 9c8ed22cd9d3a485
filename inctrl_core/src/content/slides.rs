use super::Icon;

/// One hero slider frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    /// Background image asset path.
    pub image: &'static str,
    /// Icon shown in the subtitle badge.
    pub icon: Icon,
    /// Headline; the first word is set apart from the rest.
    pub title: &'static str,
    /// Badge text.
    pub subtitle: &'static str,
    /// Lead paragraph.
    pub description: &'static str,
}

impl Slide {
    /// Split the title into its first word and the remainder.
    ///
    /// `"Security & Surveillance"` becomes `("Security", "& Surveillance")`;
    /// a one-word title has an empty remainder.
    pub fn title_parts(&self) -> (&'static str, &'static str) {
        let title = self.title.trim();
        match title.split_once(' ') {
            Some((head, tail)) => (head, tail.trim_start()),
            None => (title, ""),
        }
    }
}

/// Hero slider frames, in display order.
pub const SLIDES: &[Slide] = &[
    Slide {
        image: "assets/hero-security.jpg",
        icon: Icon::Shield,
        title: "Security & Surveillance",
        subtitle: "4K Cameras • IP Systems • Smart Alerts",
        description: "Protect what matters most with enterprise-grade security solutions",
    },
    Slide {
        image: "assets/hero-cabling.jpg",
        icon: Icon::Cable,
        title: "Structured Cabling",
        subtitle: "CAT6 • Fiber Optic • Complete Infrastructure",
        description: "Future-proof your network with professional cabling installation",
    },
    Slide {
        image: "assets/hero-signage.jpg",
        icon: Icon::Monitor,
        title: "Digital Signage",
        subtitle: "Video Walls • Menu Boards • Interactive Kiosks",
        description: "Captivate your audience with stunning digital displays",
    },
    Slide {
        image: "assets/hero-av.jpg",
        icon: Icon::Speaker,
        title: "Audio Visual",
        subtitle: "Conference Rooms • PA Systems • TV Mounting",
        description: "Transform spaces with professional AV installations",
    },
];
