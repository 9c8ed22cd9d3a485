use std::fmt;

use super::Icon;

/// Internal destination: a path plus an optional section anchor.
///
/// Opaque to this crate; the router and the browser resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Absolute path, `/` for the home page.
    pub path: &'static str,
    /// Fragment without the leading `#`.
    pub anchor: Option<&'static str>,
}

impl Route {
    /// Plain path.
    pub const fn page(path: &'static str) -> Self {
        Self { path, anchor: None }
    }

    /// Path with a section anchor.
    pub const fn anchored(path: &'static str, anchor: &'static str) -> Self {
        Self {
            path,
            anchor: Some(anchor),
        }
    }

    /// Value for an `href` attribute.
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor {
            Some(anchor) => write!(f, "{}#{}", self.path, anchor),
            None => f.write_str(self.path),
        }
    }
}

/// Labelled internal link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Anchor text.
    pub label: &'static str,
    /// Destination.
    pub route: Route,
}

/// Outbound social profile, opened in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Button icon.
    pub icon: Icon,
    /// Accessible label.
    pub label: &'static str,
    /// Absolute URL.
    pub url: &'static str,
}

/// Contact details behind the call/email actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo<'a> {
    /// Email address.
    pub email: &'a str,
    /// Phone number as displayed, e.g. `+1 (555) 123-4567`.
    pub phone: &'a str,
}

impl ContactInfo<'_> {
    /// `mailto:` href.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }

    /// `tel:` href: a leading `+` and the digits, nothing else.
    pub fn tel(&self) -> String {
        let phone = self.phone.trim();
        let mut href = String::from("tel:");
        if phone.starts_with('+') {
            href.push('+');
        }
        href.extend(phone.chars().filter(char::is_ascii_digit));
        href
    }
}

/// Header navigation (in-page anchors on the home page).
pub const NAV_LINKS: &[Link] = &[
    Link {
        label: "Solutions",
        route: Route::anchored("/", "solutions"),
    },
    Link {
        label: "Why Us",
        route: Route::anchored("/", "why-us"),
    },
    Link {
        label: "Portfolio",
        route: Route::anchored("/", "portfolio"),
    },
    Link {
        label: "Service Area",
        route: Route::anchored("/", "service-area"),
    },
    Link {
        label: "Contact",
        route: Route::anchored("/", "contact"),
    },
];

/// Footer "Services" column.
pub const SERVICE_LINKS: &[Link] = &[
    Link {
        label: "Security Systems",
        route: Route::anchored("/services", "security"),
    },
    Link {
        label: "Structured Cabling",
        route: Route::anchored("/services", "cabling"),
    },
    Link {
        label: "Digital Signage",
        route: Route::anchored("/services", "signage"),
    },
    Link {
        label: "Audio Visual",
        route: Route::anchored("/services", "av"),
    },
    Link {
        label: "IT Field Services",
        route: Route::anchored("/services", "field"),
    },
];

/// Footer "Company" column.
pub const COMPANY_LINKS: &[Link] = &[
    Link {
        label: "About Us",
        route: Route::page("/about"),
    },
    Link {
        label: "Our Work",
        route: Route::page("/portfolio"),
    },
    Link {
        label: "Careers",
        route: Route::anchored("/about", "careers"),
    },
];

/// Footer "Support" column.
pub const SUPPORT_LINKS: &[Link] = &[
    Link {
        label: "Contact Us",
        route: Route::page("/contact"),
    },
    Link {
        label: "Request a Quote",
        route: Route::page("/contact"),
    },
    Link {
        label: "Privacy Policy",
        route: Route::page("/privacy"),
    },
    Link {
        label: "Terms of Service",
        route: Route::page("/terms"),
    },
];

/// Footer social buttons.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        url: "https://linkedin.com",
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "Twitter",
        url: "https://twitter.com",
    },
    SocialLink {
        icon: Icon::Facebook,
        label: "Facebook",
        url: "https://facebook.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_href_appends_anchor() {
        assert_eq!(Route::anchored("/services", "av").href(), "/services#av");
        assert_eq!(Route::page("/about").href(), "/about");
    }

    #[test]
    fn contact_hrefs() {
        let contact = ContactInfo {
            email: "info@inctrlts.com",
            phone: "+1 (555) 123-4567",
        };
        assert_eq!(contact.mailto(), "mailto:info@inctrlts.com");
        assert_eq!(contact.tel(), "tel:+15551234567");
    }

    #[test]
    fn tel_without_country_prefix() {
        let contact = ContactInfo {
            email: "",
            phone: "(407) 555-0100",
        };
        assert_eq!(contact.tel(), "tel:4075550100");
    }

    #[test]
    fn social_links_are_absolute() {
        assert!(SOCIAL_LINKS.iter().all(|s| s.url.starts_with("https://")));
    }
}
