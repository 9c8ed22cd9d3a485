// Portfolio page - `?category=<slug>` preselects a filter
use crate::sections::{Cta, PageTitle, Portfolio, Testimonials};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let initial = use_query_map().with_untracked(|q| q.get("category"));

    view! {
        <PageTitle page="Our Work" />
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Our Work"</h1>
                <p class="page-description">
                    "Security, cabling, signage, AV and IT projects across Central Florida"
                </p>
            </div>
        </section>
        <Portfolio initial_filter=initial />
        <Testimonials />
        <Cta />
    }
}
