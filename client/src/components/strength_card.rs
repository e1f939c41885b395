//! "Strength" card on the about page.

use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::content::profile::Strength;

#[component]
pub fn StrengthCard(strength: &'static Strength) -> impl IntoView {
    view! {
        <div class="card strength-card">
            <div class="card__header">
                <span class="strength-card__icon">
                    <IconSvg icon=strength.icon size="icon--lg" />
                </span>
                <h3 class="card__title">{strength.title}</h3>
            </div>
            <div class="card__content">
                <p class="strength-card__description">{strength.description}</p>
            </div>
        </div>
    }
}
