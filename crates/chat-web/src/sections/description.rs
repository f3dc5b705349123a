//! Description Section

use leptos::prelude::*;

use crate::content::{
    DESCRIPTION_HEADING, DESCRIPTION_INTRO, DESCRIPTION_OUTRO, EXAMPLE_PROMPTS,
    EXAMPLE_PROMPTS_LEAD,
};

#[component]
pub fn Description() -> impl IntoView {
    view! {
        <section class="description">
            <div class="description-card">
                <h2>{DESCRIPTION_HEADING}</h2>
                <p>{DESCRIPTION_INTRO}</p>
                <p>{EXAMPLE_PROMPTS_LEAD}</p>
                <ul class="example-prompts">
                    {EXAMPLE_PROMPTS
                        .iter()
                        .map(|prompt| view! { <li>"👉“"{*prompt}"”"</li> })
                        .collect_view()}
                </ul>
                <p>{DESCRIPTION_OUTRO}</p>
            </div>
        </section>
    }
}
