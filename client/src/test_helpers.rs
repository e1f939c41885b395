//! Server-side render helpers shared by component and page tests.

use leptos::prelude::*;

/// Render a view to an HTML string under a fresh reactive owner, with the
/// `<!>` hydration placeholders removed so assertions see plain markup.
pub(crate) fn render<V, F>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView + 'static,
{
    let owner = Owner::new();
    owner.with(|| build().into_view().to_html()).replace("<!>", "")
}

/// Number of non-overlapping occurrences of `needle` in `html`.
pub(crate) fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Text following each `class="{class}">` up to the next tag.
pub(crate) fn texts_after_class(html: &str, class: &str) -> Vec<String> {
    let marker = format!("class=\"{class}\">");
    html.split(marker.as_str())
        .skip(1)
        .map(|rest| rest.split('<').next().unwrap_or_default().to_owned())
        .collect()
}
