//! Chat Panel
//!
//! Binds [`ChatState`] to a signal. Submitting commits the prompt
//! synchronously; the reply is fetched on a local task and settled into the
//! same signal when it arrives.

use chat_core::{ChatState, Message, PendingPrompt, SendPhase, SubmitTrigger};
use chat_runtime::{EndpointConfig, HttpChatBackend};
use leptos::prelude::*;

use crate::animation::chat_log_enter;
use crate::components::{MessageBubble, SendIcon, TypingIndicator};
use crate::content::{CHAT_HEADING, INPUT_PLACEHOLDER};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = RwSignal::new(ChatState::new());
    let endpoint = StoredValue::new(EndpointConfig::from_build_env());

    let messages = Memo::new(move |_| state.with(|s| s.conversation().messages().to_vec()));
    let revision = Memo::new(move |_| state.with(|s| s.conversation().revision()));
    let sending = Memo::new(move |_| state.with(|s| s.phase() == SendPhase::Sending));

    let deliver = move |pending: PendingPrompt| {
        let backend = HttpChatBackend::from_config(endpoint.get_value());
        leptos::task::spawn_local(async move {
            let outcome = pending.deliver(&backend).await;
            if let Err(ref e) = outcome {
                leptos::logging::error!("Error sending message to backend: {e}");
            }
            state.update(|s| {
                s.settle(outcome);
            });
        });
    };

    let send = move |trigger: SubmitTrigger| {
        if state.with_untracked(|s| s.input().is_blank()) {
            return;
        }
        if let Some(pending) = state.try_update(|s| s.submit(trigger)).flatten() {
            deliver(pending);
        }
    };

    view! {
        <aside class="chat-panel">
            <h2 class="chat-heading">{CHAT_HEADING}</h2>
            <div class=move || format!("chat-log {}", chat_log_enter(revision.get()))>
                <For
                    each=move || messages.get().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=move |(_, message): (usize, Message)| {
                        view! { <MessageBubble message=message /> }
                    }
                />
                <Show when=move || sending.get()>
                    <TypingIndicator />
                </Show>
            </div>

            <div class="chat-input">
                <input
                    type="text"
                    placeholder=INPUT_PLACEHOLDER
                    prop:value=move || state.with(|s| s.input().as_str().to_owned())
                    on:input=move |ev| state.update(|s| s.set_input(event_target_value(&ev)))
                    on:keydown=move |ev| {
                        if let Some(trigger) = SubmitTrigger::from_keydown(&ev.key(), ev.is_composing()) {
                            send(trigger);
                        }
                    }
                />
                <button class="send-button" aria-label="Send" on:click=move |_| send(SubmitTrigger::Click)>
                    <SendIcon />
                </button>
            </div>
        </aside>
    }
}
