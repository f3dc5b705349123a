//! Page Sections

mod chat;
mod description;
mod footer;
mod hero;

pub use chat::ChatPanel;
pub use description::Description;
pub use footer::Footer;
pub use hero::Hero;
