//! Korean Fluency landing page
//!
//! Leptos-based WASM frontend: hero, chat panel, description and footer on a
//! single page.

mod animation;
mod app;
mod components;
mod content;
mod sections;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
