// Document head: title, description, canonical link and JSON-LD

use inctrl_core::SiteConfig;
use inctrl_core::content::{COMPANY_NAME, PageMeta};
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};

use crate::hooks::use_site_config;

/// Serialized `LocalBusiness` record for the home page.
pub fn structured_data_json(meta: &PageMeta, config: &SiteConfig) -> String {
    let value = meta.structured_data(&config.site.canonical_url, config.contact.info());
    match serde_json::to_string(&value) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "structured data dropped");
            String::new()
        }
    }
}

/// `"{page} | {company}"`.
pub fn page_title(page: &str) -> String {
    format!("{page} | {COMPANY_NAME}")
}

/// Full head block for the home page.
#[component]
pub fn SeoMeta(meta: PageMeta) -> impl IntoView {
    let config = use_site_config();
    let json_ld = structured_data_json(&meta, &config);
    let canonical = config.site.canonical_url;

    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
        <Meta name="keywords" content=meta.keywords_content() />
        <Meta property="og:title" content=meta.title />
        <Meta property="og:description" content=meta.description />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Link rel="canonical" href=canonical />
        <Script type_="application/ld+json">{json_ld}</Script>
    }
}

/// Title-only head block for the inner pages.
#[component]
pub fn PageTitle(#[prop(into)] page: String) -> impl IntoView {
    view! { <Title text=page_title(&page) /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inctrl_core::content::{CITIES, HOME_META};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn json_ld_is_a_local_business() {
        let json = structured_data_json(&HOME_META, &SiteConfig::default());
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@type"], "LocalBusiness");
        assert_eq!(value["url"], "https://inctrl.tech");
        assert_eq!(value["telephone"], "+1 (555) 123-4567");
        assert_eq!(value["areaServed"].as_array().map(Vec::len), Some(CITIES.len()));
    }

    #[test]
    fn inner_page_titles_carry_the_company() {
        assert_eq!(page_title("Services"), "Services | InCtrl Technology Solutions");
    }
}
