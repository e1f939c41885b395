//! Fallback page for unknown paths.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::content::site::HOME_PATH;

#[cfg(all(test, feature = "ssr"))]
#[path = "not_found_test.rs"]
mod not_found_test;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="not-found container">
                <h1 class="page-title">"404"</h1>
                <p class="page-lead">"Page not found."</p>
                <a href=HOME_PATH class="hero__action">
                    "Home"
                </a>
            </div>
        </Layout>
    }
}
