//! Main App Component

use leptos::prelude::*;

use crate::content::BACKGROUND_IMAGE_URL;
use crate::sections::{ChatPanel, Description, Footer, Hero};

const STYLESHEET: &str = include_str!("../style/main.css");

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let background = format!("background-image: url({BACKGROUND_IMAGE_URL});");

    view! {
        <style>{STYLESHEET}</style>
        <div class="landing" style=background>
            <div class="landing-main">
                <Hero />
                <ChatPanel />
            </div>
            <Description />
            <Footer />
        </div>
    }
}
