// Inline stroke icons (24x24 grid, lucide-style outlines)

use inctrl_core::content::Icon;
use leptos::prelude::*;

fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        Icon::Cable => &[
            "M4 9a2 2 0 0 1-2-2V5h6v2a2 2 0 0 1-2 2Z",
            "M3 5V3",
            "M7 5V3",
            "M19 15V6.5a3.5 3.5 0 0 0-7 0v11a3.5 3.5 0 0 1-7 0V9",
            "M17 21v-2",
            "M21 21v-2",
            "M22 19h-6v-2a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2Z",
        ],
        Icon::Monitor => &["M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z", "M8 21h8", "M12 17v4"],
        Icon::Speaker => &[
            "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M12 6h.01",
        ],
        Icon::Wrench => &["M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"],
        Icon::Building => &[
            "M6 2h12v20H6z",
            "M6 12H4a2 2 0 0 0-2 2v8h4",
            "M18 9h2a2 2 0 0 1 2 2v11h-4",
            "M10 6h4",
            "M10 10h4",
            "M10 14h4",
            "M10 18h4",
        ],
        Icon::Clock => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        Icon::Headphones => &["M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3"],
        Icon::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Icon::Award => &["M12 14a6 6 0 1 0 0-12 6 6 0 0 0 0 12z", "M15.48 12.89 17 22l-5-3-5 3 1.52-9.11"],
        Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        Icon::MapPin => &["M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z", "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"],
        Icon::Truck => &[
            "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
            "M15 18H9",
            "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.62l-3.48-4.35A1 1 0 0 0 17.52 8H14",
            "M17 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
            "M7 20a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
        ],
        Icon::Phone => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"],
        Icon::Mail => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "m22 6-10 7L2 6"],
        Icon::Quote => &[
            "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2H4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .01-1 1.03V20c0 1 0 1 1 1z",
            "M15 21c3 0 7-1 7-8V5c0-1.25-.76-2.02-2-2h-4c-1.25 0-2 .75-2 1.97V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
        ],
        Icon::Star => &["m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
        Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Icon::ChevronLeft => &["m15 18-6-6 6-6"],
        Icon::ChevronRight => &["m9 18 6-6-6-6"],
        Icon::ExternalLink => &["M15 3h6v6", "M10 14 21 3", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"],
        Icon::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
        ],
        Icon::Twitter => &["M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"],
        Icon::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
    }
}

/// Outline icon. `class` lands on the `<svg>`; the icon name is exposed
/// as `data-icon` for styling hooks.
#[component]
pub fn SvgIcon(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {class}")
    };

    view! {
        <svg
            class=class
            data-icon=icon.name()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths(icon).iter().map(|d| view! { <path d=*d /> }).collect::<Vec<_>>()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::render;

    #[test]
    fn every_icon_has_a_path() {
        use Icon::*;
        for icon in [
            Shield, Cable, Monitor, Speaker, Wrench, Building, Clock, Headphones, Users, Award,
            CheckCircle, Zap, MapPin, Truck, Phone, Mail, Quote, Star, ArrowRight, ChevronLeft,
            ChevronRight, ExternalLink, Linkedin, Twitter, Facebook,
        ] {
            assert!(!paths(icon).is_empty(), "{icon:?}");
        }
    }

    #[test]
    fn renders_svg_with_name_and_class() {
        let html = render(|| view! { <SvgIcon icon=Icon::MapPin class="pin" /> });
        assert!(html.contains("<svg"));
        assert!(html.contains("data-icon=\"map-pin\""));
        assert!(html.contains("class=\"icon pin\""));
        assert_eq!(html.matches("<path").count(), 2);
    }
}
