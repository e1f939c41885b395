//! Site chrome content: title, navigation, footer contacts.

use super::icon::Icon;

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

pub const SITE_TITLE: &str = "Dev Portfolio";
pub const COPYRIGHT: &str = "© 2024 Dev Portfolio. All rights reserved.";

/// Document language; the page copy is Korean.
pub const SITE_LANG: &str = "ko";
/// `<meta name="description">` for the document head.
pub const SITE_DESCRIPTION: &str = "웹 개발자 포트폴리오: 프로젝트, 기술 스택, 소개";

/// Internal navigation target handled by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const HOME_PATH: &str = "/";
pub const PROJECTS_PATH: &str = "/projects";
pub const ABOUT_PATH: &str = "/about";

pub static NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", path: HOME_PATH },
    NavLink { label: "Projects", path: PROJECTS_PATH },
    NavLink { label: "About", path: ABOUT_PATH },
];

/// External contact link rendered as an icon in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: Icon,
    pub href: &'static str,
}

impl ContactLink {
    /// Web targets open in a new browsing context. `mailto:` hands off to the
    /// mail client and carries no target.
    pub fn opens_new_context(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink { icon: Icon::Github, href: "https://github.com" },
    ContactLink { icon: Icon::Linkedin, href: "https://linkedin.com" },
    ContactLink { icon: Icon::Mail, href: "mailto:your.email@example.com" },
];
