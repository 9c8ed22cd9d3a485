// Home page - every section in landing order
use crate::sections::{
    Cta, HeroSlider, Portfolio, SeoMeta, ServiceArea, Solutions, Testimonials, WhyChooseUs,
};
use inctrl_core::content::HOME_META;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta meta=HOME_META />
        <HeroSlider />
        <Solutions />
        <WhyChooseUs />
        <Portfolio />
        <Testimonials />
        <ServiceArea />
        <Cta />
    }
}
