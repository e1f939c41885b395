//! Skill category block: title plus one comma-joined line of skills.

use leptos::prelude::*;

use crate::content::profile::SkillCategory;

#[component]
pub fn SkillBlock(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="skill-block">
            <h3 class="skill-block__title">{category.title}</h3>
            <p class="skill-block__skills">{category.joined()}</p>
        </div>
    }
}
