//! Tag badge.

use leptos::prelude::*;

#[component]
pub fn Badge(label: &'static str) -> impl IntoView {
    view! { <span class="badge">{label}</span> }
}
