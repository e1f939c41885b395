//! Shared page chrome: header navigation, main region, footer contacts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders through `Layout`. Navigation uses plain anchors; the
//! router intercepts same-origin clicks after hydration, and the server
//! renders the same markup for direct loads.

use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::content::site::{CONTACT_LINKS, COPYRIGHT, HOME_PATH, NAV_LINKS, SITE_TITLE};

#[cfg(all(test, feature = "ssr"))]
#[path = "layout_test.rs"]
mod layout_test;

/// Page chrome wrapping `children` in the `<main>` region.
///
/// `children` is optional; without it the main region renders empty and the
/// header and footer are unchanged.
#[component]
pub fn Layout(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="site">
            <header class="site-header">
                <nav class="site-nav container">
                    <a href=HOME_PATH class="site-nav__brand">
                        {SITE_TITLE}
                    </a>
                    <div class="site-nav__links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.path class="site-nav__link">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </nav>
            </header>

            <main class="site-main">{children.map(|children| children())}</main>

            <footer class="site-footer">
                <div class="site-footer__inner container">
                    <p class="site-footer__copyright">{COPYRIGHT}</p>
                    <div class="site-footer__contacts">
                        {CONTACT_LINKS
                            .iter()
                            .map(|contact| {
                                let external = contact.opens_new_context();
                                view! {
                                    <a
                                        href=contact.href
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noopener noreferrer")
                                        class="site-footer__contact"
                                        aria-label=contact.icon.label()
                                    >
                                        <IconSvg icon=contact.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </footer>
        </div>
    }
}
