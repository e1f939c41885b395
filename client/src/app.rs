//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::site::{SITE_DESCRIPTION, SITE_LANG, SITE_TITLE};
use crate::pages::{about::AboutPage, home::HomePage, not_found::NotFoundPage, projects::ProjectsPage};

/// HTML document the server wraps around [`App`].
///
/// Language and description come from the site content; the hydration
/// scripts load the `hydrate` build of this crate from `/pkg`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=SITE_LANG>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=SITE_DESCRIPTION/>
                <meta name="theme-color" content="#0b0d12"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Three routes: `/`, `/projects`, `/about`. Anything else falls back to the
/// not-found page inside the shared layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=SITE_TITLE/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
            </Routes>
        </Router>
    }
}
