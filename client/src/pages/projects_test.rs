use super::*;
use crate::test_helpers::{count, render, texts_after_class};

#[test]
fn projects_page_renders_one_card_per_record() {
    let html = render(|| view! { <ProjectsPage /> });
    assert_eq!(count(&html, "class=\"card project-card\""), PROJECTS.len());
    assert_eq!(
        texts_after_class(&html, "card__title project-card__title"),
        ["프로젝트 1", "프로젝트 2", "프로젝트 3"]
    );
}

#[test]
fn projects_page_link_counts_follow_presence_rule() {
    let html = render(|| view! { <ProjectsPage /> });
    let expected: usize = PROJECTS.iter().map(|p| p.links().len()).sum();
    assert_eq!(expected, 5);
    assert_eq!(count(&html, "class=\"project-card__link\""), expected);
    assert!(!html.contains("href=\"https://project2-demo.com\""));
}

#[test]
fn projects_page_badges_total_all_tags() {
    let html = render(|| view! { <ProjectsPage /> });
    let all_tags: Vec<&str> = PROJECTS.iter().flat_map(|p| p.tags.iter().copied()).collect();
    assert_eq!(texts_after_class(&html, "badge"), all_tags);
}

#[test]
fn projects_render_is_idempotent() {
    assert_eq!(render(|| view! { <ProjectsPage /> }), render(|| view! { <ProjectsPage /> }));
}
