use inctrl_core::content::{CATEGORY_OPTIONS, Icon, PROJECTS, Project};
use inctrl_core::gallery::Gallery;
use inctrl_core::parallax::PORTFOLIO_BACKGROUND;
use leptos::html;
use leptos::prelude::*;

use super::motion::{ParallaxLayer, Reveal};
use crate::hooks::use_scroll_progress;
use crate::icons::SvgIcon;

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card" data-category=project.category.slug()>
            <div class="project-media">
                <img src=project.image alt=project.title loading="lazy" />
                <span class="project-tag">{project.category.to_string()}</span>
            </div>
            <div class="project-body">
                <h3 class="card-title">{project.title}</h3>
                <p class="card-description">{project.description}</p>
                <span class="project-link">
                    "View Details"
                    <SvgIcon icon=Icon::ExternalLink />
                </span>
            </div>
        </article>
    }
}

/// Filterable project gallery. `initial_filter` is a category slug (or
/// `"all"`); an unknown slug is logged and the gallery shows everything.
#[component]
pub fn Portfolio(#[prop(default = None)] initial_filter: Option<String>) -> impl IntoView {
    let mut start = Gallery::new(PROJECTS);
    if let Some(slug) = initial_filter.as_deref() {
        if let Err(e) = start.set_filter_slug(slug) {
            tracing::warn!(error = %e, "ignoring portfolio filter");
        }
    }
    let gallery = RwSignal::new(start);

    let section = NodeRef::<html::Section>::new();
    let progress = use_scroll_progress(section);

    let filters = CATEGORY_OPTIONS
        .iter()
        .map(|option| {
            let filter = option.filter;
            view! {
                <button
                    class=move || {
                        if gallery.with(|g| g.filter() == filter) {
                            "filter-button active"
                        } else {
                            "filter-button"
                        }
                    }
                    aria-pressed=move || gallery.with(|g| g.filter() == filter).to_string()
                    on:click=move |_| gallery.update(|g| g.set_filter(filter))
                >
                    {option.icon.map(|icon| view! { <SvgIcon icon=icon /> })}
                    <span>{option.label}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="portfolio" class="section portfolio" node_ref=section>
            <ParallaxLayer progress=progress layer=PORTFOLIO_BACKGROUND class="portfolio-bg" />
            <div class="container">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Our Work"</span>
                    <h2 class="section-title">"Recent Projects"</h2>
                    <p class="section-description">
                        "A look at installations we have delivered across Central Florida."
                    </p>
                </Reveal>
                <div class="filter-bar" role="group" aria-label="Filter projects">
                    {filters}
                </div>
                <div class="projects-grid">
                    {move || {
                        let visible = gallery.with(|g| g.filtered());
                        if visible.is_empty() {
                            view! { <p class="projects-empty">"No projects in this category yet."</p> }
                                .into_any()
                        } else {
                            visible.into_iter().map(project_card).collect::<Vec<_>>().into_any()
                        }
                    }}
                </div>
                <div class="portfolio-cta">
                    <a href="/#contact" class="btn btn-primary">
                        "Start Your Project"
                        <SvgIcon icon=Icon::ArrowRight />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::render;
    use inctrl_core::content::Category;

    #[test]
    fn all_filter_renders_every_project() {
        let html = render(|| view! { <Portfolio /> });
        assert_eq!(html.matches("class=\"project-card\"").count(), PROJECTS.len());
        assert_eq!(html.matches("data-icon=\"external-link\"").count(), PROJECTS.len());
        assert_eq!(html.matches("class=\"filter-button active\"").count(), 1);
        assert_eq!(
            html.matches("class=\"filter-button").count(),
            CATEGORY_OPTIONS.len()
        );
    }

    #[test]
    fn initial_slug_narrows_the_grid() {
        let html = render(|| view! { <Portfolio initial_filter=Some("security".into()) /> });
        let expected = PROJECTS
            .iter()
            .filter(|p| p.category == Category::Security)
            .count();
        assert_eq!(html.matches("class=\"project-card\"").count(), expected);
        assert_eq!(
            html.matches("data-category=\"security\"").count(),
            expected
        );
    }

    #[test]
    fn unknown_slug_falls_back_to_all() {
        let html = render(|| view! { <Portfolio initial_filter=Some("plumbing".into()) /> });
        assert_eq!(html.matches("class=\"project-card\"").count(), PROJECTS.len());
    }
}
