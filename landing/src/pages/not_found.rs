// Fallback for unknown routes
use crate::sections::PageTitle;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageTitle page="Page Not Found" />
        <section class="page-header not-found">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-description">"That page does not exist."</p>
                <a href="/" class="btn btn-primary">"Back to Home"</a>
            </div>
        </section>
    }
}
