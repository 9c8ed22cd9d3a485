use serde_json::{Value, json};

use super::{CITIES, COMPANY_NAME, ContactInfo};

/// Document head contents for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// `<title>`.
    pub title: &'static str,
    /// `<meta name="description">`.
    pub description: &'static str,
    /// `<meta name="keywords">`, one entry per phrase.
    pub keywords: &'static [&'static str],
}

impl PageMeta {
    /// Keywords joined the way the meta tag expects.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }

    /// schema.org `LocalBusiness` record for the JSON-LD script tag.
    pub fn structured_data(&self, canonical_url: &str, contact: ContactInfo<'_>) -> Value {
        let area: Vec<Value> = CITIES
            .iter()
            .map(|city| json!({ "@type": "City", "name": city }))
            .collect();

        json!({
            "@context": "https://schema.org",
            "@type": "LocalBusiness",
            "name": COMPANY_NAME,
            "description": self.description,
            "url": canonical_url,
            "email": contact.email,
            "telephone": contact.phone,
            "areaServed": area,
        })
    }
}

/// Home page metadata.
pub const HOME_META: PageMeta = PageMeta {
    title: "InCtrl Technology Solutions | Security, Cabling, Digital Signage & AV in Orlando",
    description: "Central Florida's all-in-one tech installation partner. Security systems, structured cabling, digital signage, audio visual & IT field services. 200+ miles coverage around Orlando.",
    keywords: &[
        "security cameras Orlando",
        "structured cabling Florida",
        "digital signage installation",
        "AV installation",
        "IT field services",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_comma_separated() {
        assert_eq!(
            HOME_META.keywords_content(),
            "security cameras Orlando, structured cabling Florida, digital signage installation, AV installation, IT field services"
        );
    }

    #[test]
    fn structured_data_carries_contact_and_area() {
        let contact = ContactInfo {
            email: "info@inctrlts.com",
            phone: "+1 (555) 123-4567",
        };
        let doc = HOME_META.structured_data("https://inctrl.tech", contact);

        assert_eq!(doc["@type"], "LocalBusiness");
        assert_eq!(doc["url"], "https://inctrl.tech");
        assert_eq!(doc["email"], "info@inctrlts.com");
        assert_eq!(doc["areaServed"].as_array().map(Vec::len), Some(CITIES.len()));
        assert_eq!(doc["areaServed"][0]["name"], "Orlando");
    }
}
