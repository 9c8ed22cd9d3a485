// Contact page
use crate::hooks::use_site_config;
use crate::icons::SvgIcon;
use crate::sections::{Cta, PageTitle, ServiceArea};
use inctrl_core::content::Icon;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let contact = use_site_config().contact;
    let info = contact.info();
    let (mailto, tel) = (info.mailto(), info.tel());

    view! {
        <PageTitle page="Contact" />
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Contact Us"</h1>
                <p class="page-description">"Tell us about your project. We reply within one business day."</p>
                <div class="contact-cards">
                    <a href=mailto class="contact-card">
                        <SvgIcon icon=Icon::Mail />
                        <span>{contact.email.clone()}</span>
                    </a>
                    <a href=tel class="contact-card">
                        <SvgIcon icon=Icon::Phone />
                        <span>{contact.phone.clone()}</span>
                    </a>
                </div>
            </div>
        </section>
        <Cta />
        <ServiceArea />
    }
}
