//! Hero Section

use leptos::prelude::*;

use crate::animation::HERO_ENTER;
use crate::content::{HERO_SUBTITLE, HERO_TITLE_HIGHLIGHT, HERO_TITLE_LEAD};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class=format!("hero {HERO_ENTER}")>
            <h1 class="hero-title">
                {HERO_TITLE_LEAD}
                <span class="highlight">{HERO_TITLE_HIGHLIGHT}</span>
            </h1>
            <p class="hero-subtitle">{HERO_SUBTITLE}</p>
        </header>
    }
}
