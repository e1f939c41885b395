//! Project records shown on the projects page.
//!
//! DESIGN
//! ======
//! Records are `'static` constants. Optional links are modeled as `Option`
//! so "no link" is never encoded as a sentinel string; the presence check
//! happens once, in [`ProjectRecord::links`], at the render boundary.

use super::icon::Icon;

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Rendering key. Unique within [`PROJECTS`].
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Rendered as one badge per entry, in order, without deduplication.
    pub tags: &'static [&'static str],
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

/// Kind of outbound link rendered in a project card's link row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLinkKind {
    GitHub,
    Demo,
}

impl ProjectLinkKind {
    /// Visible link label.
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::Demo => "Demo",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::GitHub => Icon::Github,
            Self::Demo => Icon::ExternalLink,
        }
    }
}

/// A link that survived the presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: ProjectLinkKind,
    pub href: &'static str,
}

impl ProjectRecord {
    /// GitHub URL, if present and non-empty.
    pub fn github_url(&self) -> Option<&'static str> {
        self.github.filter(|url| !url.is_empty())
    }

    /// Demo URL, if present and non-empty.
    pub fn demo_url(&self) -> Option<&'static str> {
        self.demo.filter(|url| !url.is_empty())
    }

    /// Link row for this project: GitHub first, then Demo, each only when
    /// its URL is usable. Empty when neither is.
    pub fn links(&self) -> Vec<ProjectLink> {
        [
            (ProjectLinkKind::GitHub, self.github_url()),
            (ProjectLinkKind::Demo, self.demo_url()),
        ]
        .into_iter()
        .filter_map(|(kind, href)| href.map(|href| ProjectLink { kind, href }))
        .collect()
    }
}

// =============================================================================
// DATA
// =============================================================================

/// Projects in display order.
pub static PROJECTS: [ProjectRecord; 3] = [
    ProjectRecord {
        id: 1,
        title: "프로젝트 1",
        description: "프로젝트에 대한 간단한 설명입니다. 어떤 문제를 해결했는지, 어떤 기술을 사용했는지 설명하세요.",
        tags: &["React", "TypeScript", "Tailwind CSS"],
        github: Some("https://github.com/yourusername/project1"),
        demo: Some("https://project1-demo.com"),
    },
    ProjectRecord {
        id: 2,
        title: "프로젝트 2",
        description: "또 다른 프로젝트에 대한 설명입니다. 주요 기능과 성과를 간략히 작성하세요.",
        tags: &["Node.js", "Express", "MongoDB"],
        github: Some("https://github.com/yourusername/project2"),
        demo: None,
    },
    ProjectRecord {
        id: 3,
        title: "프로젝트 3",
        description: "세 번째 프로젝트 설명입니다. 배운 점이나 특별한 도전 과제를 언급할 수 있습니다.",
        tags: &["Python", "Django", "PostgreSQL"],
        github: Some("https://github.com/yourusername/project3"),
        demo: Some("https://project3-demo.com"),
    },
];

pub const PROJECTS_HEADING: &str = "프로젝트";
pub const PROJECTS_INTRO: &str =
    "제가 작업한 프로젝트들입니다. 각 프로젝트를 클릭하여 자세한 내용을 확인하세요.";
