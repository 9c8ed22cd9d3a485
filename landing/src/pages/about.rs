// About page
use crate::sections::{About, PageTitle, ServiceArea, WhyChooseUs};
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageTitle page="About Us" />
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"About InCtrl"</h1>
                <p class="page-description">
                    "Central Florida's all-in-one technology installation team"
                </p>
            </div>
        </section>
        <About />
        <WhyChooseUs />
        <ServiceArea />
    }
}
