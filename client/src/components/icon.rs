//! Inline SVG icon component.

use leptos::prelude::*;

use crate::content::icon::Icon;

/// Stroke icon sized by a modifier class (`icon--sm`, `icon--md`, `icon--lg`).
#[component]
pub fn IconSvg(icon: Icon, #[prop(default = "icon--md")] size: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {size}")
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon.svg_body()
        ></svg>
    }
}
