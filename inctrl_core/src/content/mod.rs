//! Static content tables.
//!
//! Pure data: every record is `'static` and nothing here mutates. The
//! landing crate renders these tables; the state machines only ever hold
//! indices or filters into them.

mod company;
mod icon;
mod links;
mod meta;
mod offerings;
mod portfolio;
mod slides;
mod testimonials;

pub use company::{
    ABOUT_HIGHLIGHTS, ABOUT_STATS, ADVANTAGES, Advantage, CITIES, STATS, Stat, StaticStat,
    TRUST_INDICATORS, TrustIndicator,
};
pub use icon::Icon;
pub use links::{
    COMPANY_LINKS, ContactInfo, Link, NAV_LINKS, Route, SERVICE_LINKS, SOCIAL_LINKS,
    SUPPORT_LINKS, SocialLink,
};
pub use meta::{HOME_META, PageMeta};
pub use offerings::{SERVICES, SOLUTIONS, Service, Solution};
pub use portfolio::{CATEGORY_OPTIONS, Category, CategoryOption, PROJECTS, Project};
pub use slides::{SLIDES, Slide};
pub use testimonials::{TESTIMONIALS, Testimonial};

/// Company name as shown in copy and metadata.
pub const COMPANY_NAME: &str = "InCtrl Technology Solutions";
