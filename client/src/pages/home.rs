//! Home page: hero with profile image and calls to action, then the
//! technology grid.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::tech_grid::TechGrid;
use crate::content::profile::{
    ABOUT_CTA, GREETING, GREETING_HIGHLIGHT, GREETING_TAIL, INTRO, PROFILE_IMAGE, PROFILE_IMAGE_ALT,
    PROJECTS_CTA, TECH_STACK, TECH_STACK_HEADING,
};
use crate::content::site::{ABOUT_PATH, PROJECTS_PATH};

#[cfg(all(test, feature = "ssr"))]
#[path = "home_test.rs"]
mod home_test;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <section class="hero container">
                <div class="hero__avatar">
                    <img src=PROFILE_IMAGE alt=PROFILE_IMAGE_ALT class="hero__avatar-image" />
                </div>
                <div class="hero__body">
                    <h1 class="hero__title">
                        {GREETING}
                        <br />
                        <span class="text-primary">{GREETING_HIGHLIGHT}</span>
                        {GREETING_TAIL}
                    </h1>
                    <p class="hero__intro">{INTRO}</p>
                    <div class="hero__actions">
                        <a href=PROJECTS_PATH class="hero__action">
                            {PROJECTS_CTA}
                        </a>
                        <a href=ABOUT_PATH class="hero__action">
                            {ABOUT_CTA}
                        </a>
                    </div>
                </div>
            </section>

            <section class="tech-stack container">
                <h2 class="section-title">{TECH_STACK_HEADING}</h2>
                <TechGrid techs=&TECH_STACK />
            </section>
        </Layout>
    }
}
