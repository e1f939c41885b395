use super::*;
use crate::content::projects::PROJECTS;
use crate::test_helpers::{count, render, texts_after_class};

static NO_LINKS: ProjectRecord = ProjectRecord {
    id: 7,
    title: "No links",
    description: "d",
    tags: &["Rust", "Rust"],
    github: None,
    demo: Some(""),
};

#[test]
fn first_card_has_three_badges_and_both_links() {
    let html = render(|| view! { <ProjectCard project=&PROJECTS[0] /> });
    assert!(html.contains("프로젝트 1"));
    assert_eq!(texts_after_class(&html, "badge"), ["React", "TypeScript", "Tailwind CSS"]);
    assert_eq!(count(&html, "class=\"project-card__link\""), 2);
    assert!(html.contains("href=\"https://github.com/yourusername/project1\""));
    assert!(html.contains("href=\"https://project1-demo.com\""));
    assert!(html.contains("GitHub"));
    assert!(html.contains("Demo"));
}

#[test]
fn project_links_open_in_new_context() {
    let html = render(|| view! { <ProjectCard project=&PROJECTS[0] /> });
    assert_eq!(count(&html, "target=\"_blank\""), 2);
    assert_eq!(count(&html, "rel=\"noopener noreferrer\""), 2);

    let single = render(|| view! { <ProjectCard project=&PROJECTS[1] /> });
    assert_eq!(count(&single, "target=\"_blank\""), 1);
}

#[test]
fn second_card_omits_demo_link() {
    let html = render(|| view! { <ProjectCard project=&PROJECTS[1] /> });
    assert!(html.contains("프로젝트 2"));
    assert_eq!(count(&html, "class=\"project-card__link\""), 1);
    assert!(html.contains("GitHub"));
    assert!(!html.contains("Demo"));
}

#[test]
fn card_without_usable_links_renders_empty_link_row() {
    let html = render(|| view! { <ProjectCard project=&NO_LINKS /> });
    assert!(html.contains("class=\"project-card__links\"></div>"));
    assert_eq!(count(&html, "<a "), 0);
}

#[test]
fn duplicate_tags_render_one_badge_each() {
    let html = render(|| view! { <ProjectCard project=&NO_LINKS /> });
    assert_eq!(texts_after_class(&html, "badge"), ["Rust", "Rust"]);
}

#[test]
fn every_card_matches_its_record() {
    for project in &PROJECTS {
        let html = render(move || view! { <ProjectCard project=project /> });
        assert_eq!(texts_after_class(&html, "badge"), project.tags);
        assert_eq!(count(&html, "class=\"project-card__link\""), project.links().len());
    }
}

#[test]
fn grid_renders_cards_in_list_order() {
    let html = render(|| view! { <ProjectGrid projects=&PROJECTS /> });
    assert_eq!(count(&html, "class=\"card project-card\""), PROJECTS.len());
    let titles = texts_after_class(&html, "card__title project-card__title");
    assert_eq!(titles, ["프로젝트 1", "프로젝트 2", "프로젝트 3"]);
}

#[test]
fn empty_grid_renders_without_cards() {
    let html = render(|| view! { <ProjectGrid projects=&[] /> });
    assert!(html.contains("class=\"project-grid\""));
    assert_eq!(count(&html, "project-card"), 0);
}
