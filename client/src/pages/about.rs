//! About page: biography, three strength cards, four skill categories.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::skill_block::SkillBlock;
use crate::components::strength_card::StrengthCard;
use crate::content::profile::{ABOUT_HEADING, BIO, SKILL_CATEGORIES, SKILLS_HEADING, STRENGTHS};

#[cfg(all(test, feature = "ssr"))]
#[path = "about_test.rs"]
mod about_test;

#[component]
pub fn AboutPage() -> impl IntoView {
    let [lead, rest @ ..] = &BIO;

    view! {
        <Layout>
            <div class="about container">
                <h1 class="page-title">{ABOUT_HEADING}</h1>

                <div class="about__bio">
                    <p class="about__lead">{*lead}</p>
                    {rest.iter().map(|paragraph| view! { <p class="about__paragraph">{*paragraph}</p> }).collect_view()}
                </div>

                <div class="strength-grid">
                    {STRENGTHS.iter().map(|strength| view! { <StrengthCard strength=strength /> }).collect_view()}
                </div>

                <div class="skills">
                    <h2 class="section-title">{SKILLS_HEADING}</h2>
                    <div class="skills__list">
                        {SKILL_CATEGORIES
                            .iter()
                            .map(|category| view! { <SkillBlock category=category /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Layout>
    }
}
