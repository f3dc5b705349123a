//! Footer

use leptos::prelude::*;

use crate::content::{FOOTER_CAPTION, FOOTER_LOGO_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>
                <span>{FOOTER_CAPTION}</span>
                <img src=FOOTER_LOGO_URL alt="GaiaNet logo" width="50" height="30" />
            </p>
        </footer>
    }
}
