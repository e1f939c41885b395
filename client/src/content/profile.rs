//! Profile copy for the home and about pages.
//!
//! DESIGN
//! ======
//! The strengths are a fixed three-element array rather than loaded data;
//! a fourth strength is a source change. Skill categories keep their
//! technologies as a list and join them only for display.

use super::icon::Icon;

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

// =============================================================================
// HOME
// =============================================================================

pub const GREETING: &str = "안녕하세요,";
pub const GREETING_HIGHLIGHT: &str = "개발자";
pub const GREETING_TAIL: &str = "입니다";
pub const INTRO: &str = "웹 개발과 소프트웨어 엔지니어링에 열정을 가진 개발자입니다. \
     다양한 프로젝트와 기술 스택을 활용하여 문제를 해결합니다.";

pub const PROFILE_IMAGE: &str = "/profile.jpeg";
pub const PROFILE_IMAGE_ALT: &str = "프로필";

pub const PROJECTS_CTA: &str = "프로젝트 보기 →";
pub const ABOUT_CTA: &str = "About";

pub const TECH_STACK_HEADING: &str = "주요 기술 스택";

/// Technologies shown in the home page grid, in display order.
pub static TECH_STACK: [&str; 8] =
    ["React", "TypeScript", "Node.js", "Python", "Next.js", "Tailwind CSS", "Git", "Docker"];

// =============================================================================
// ABOUT
// =============================================================================

pub const ABOUT_HEADING: &str = "About Me";

/// Biography paragraphs. The first is rendered as the lead paragraph.
pub static BIO: [&str; 3] = [
    "안녕하세요! 저는 웹 개발과 소프트웨어 엔지니어링에 열정을 가진 개발자입니다.",
    "새로운 기술을 배우고 문제를 해결하는 것을 좋아하며, 사용자 경험을 개선하는 데 관심이 많습니다. \
     팀과 협업하며 더 나은 제품을 만들어가는 과정을 즐깁니다.",
    "이 포트폴리오는 제가 작업한 프로젝트들과 기술 스택을 보여주기 위해 만들었습니다. \
     자유롭게 둘러보시고, 궁금한 점이 있으시면 언제든 연락 주세요!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static STRENGTHS: [Strength; 3] = [
    Strength {
        icon: Icon::Code,
        title: "개발",
        description: "깔끔하고 유지보수 가능한 코드를 작성하는 것을 중요하게 생각합니다.",
    },
    Strength {
        icon: Icon::Lightbulb,
        title: "문제 해결",
        description: "복잡한 문제를 분석하고 창의적인 해결책을 찾는 것을 즐깁니다.",
    },
    Strength {
        icon: Icon::Users,
        title: "협업",
        description: "팀원들과 소통하며 함께 성장하는 것을 중요하게 여깁니다.",
    },
];

pub const SKILLS_HEADING: &str = "기술 스택";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

impl SkillCategory {
    /// Display string: skills joined with `", "`.
    pub fn joined(&self) -> String {
        self.skills.join(", ")
    }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend",
        skills: &["React", "TypeScript", "Next.js", "Tailwind CSS", "HTML/CSS"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Node.js", "Express", "Python", "Django", "REST API"],
    },
    SkillCategory { title: "Database", skills: &["PostgreSQL", "MongoDB", "MySQL"] },
    SkillCategory { title: "Tools & Others", skills: &["Git", "Docker", "AWS", "CI/CD", "Agile"] },
];
