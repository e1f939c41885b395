//! Project cards and the grid that lays them out.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::icon::IconSvg;
use crate::content::projects::ProjectRecord;

#[cfg(all(test, feature = "ssr"))]
#[path = "project_card_test.rs"]
mod project_card_test;

/// Card for one project: title, description, one badge per tag, link row.
///
/// Tags are not deduplicated. The link row only contains links whose URL is
/// present and non-empty, so it can render empty.
#[component]
pub fn ProjectCard(project: &'static ProjectRecord) -> impl IntoView {
    view! {
        <article class="card project-card">
            <header class="card__header">
                <h3 class="card__title project-card__title">{project.title}</h3>
                <p class="card__description">{project.description}</p>
            </header>
            <div class="card__content project-card__content">
                <div class="project-card__tags">
                    {project.tags.iter().map(|tag| view! { <Badge label=*tag /> }).collect_view()}
                </div>
                <div class="project-card__links">
                    {project
                        .links()
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="project-card__link"
                                >
                                    <IconSvg icon=link.kind.icon() size="icon--sm" />
                                    {link.kind.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

/// Grid of project cards in slice order, keyed by project id.
#[component]
pub fn ProjectGrid(projects: &'static [ProjectRecord]) -> impl IntoView {
    view! {
        <div class="project-grid">
            <For
                each=move || projects.iter()
                key=|project| project.id
                children=|project: &'static ProjectRecord| view! { <ProjectCard project=project /> }
            />
        </div>
    }
}
