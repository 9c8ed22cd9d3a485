// Services page - static hero plus the service cards
use crate::sections::{Cta, Hero, PageTitle, Services};
use leptos::prelude::*;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <PageTitle page="Services" />
        <Hero />
        <Services />
        <Cta />
    }
}
