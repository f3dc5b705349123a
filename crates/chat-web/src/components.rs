//! UI Components

use chat_core::Message;
use leptos::prelude::*;

/// Message bubble component
///
/// User turns sit on the right, bot turns on the left.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let sender = message.sender;

    view! {
        <div class=format!("chat-row chat-row-{sender}")>
            <div class=format!("bubble bubble-{sender}")>{message.text}</div>
        </div>
    }
}

/// Shown while at least one reply is outstanding
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="chat-row chat-row-bot">
            <div class="bubble bubble-bot typing">"..."</div>
        </div>
    }
}

/// Paper airplane glyph for the send button
#[component]
pub fn SendIcon() -> impl IntoView {
    view! {
        <svg class="send-icon" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path d="M10.894 2.553a1 1 0 00-1.788 0l-7 14a1 1 0 001.169 1.409l5-1.429A1 1 0 009 15.571V11a1 1 0 112 0v4.571a1 1 0 00.725.962l5 1.428a1 1 0 001.17-1.408l-7-14z" />
        </svg>
    }
}
