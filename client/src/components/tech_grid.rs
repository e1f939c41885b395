//! Technology name grid for the home page.

use leptos::prelude::*;

/// One cell per technology, in slice order, keyed by name.
#[component]
pub fn TechGrid(techs: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="tech-grid">
            <For
                each=move || techs.iter().copied()
                key=|tech| *tech
                children=|tech: &'static str| {
                    view! {
                        <div class="tech-grid__cell">
                            <span class="tech-grid__name">{tech}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
