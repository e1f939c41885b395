//! Projects page: heading, intro, and one card per project.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::project_card::ProjectGrid;
use crate::content::projects::{PROJECTS, PROJECTS_HEADING, PROJECTS_INTRO};

#[cfg(all(test, feature = "ssr"))]
#[path = "projects_test.rs"]
mod projects_test;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="projects container">
                <div class="page-intro">
                    <h1 class="page-title">{PROJECTS_HEADING}</h1>
                    <p class="page-lead">{PROJECTS_INTRO}</p>
                </div>
                <ProjectGrid projects=&PROJECTS />
            </div>
        </Layout>
    }
}
