//! Entrance animation bindings
//!
//! CSS restarts an animation when `animation-name` changes, so the chat log
//! alternates between two identical keyframe sets each time the conversation
//! revision moves.

/// Hero class; plays once when the element is first inserted
pub const HERO_ENTER: &str = "hero-enter";

/// Class for the chat log at a given conversation revision
pub const fn chat_log_enter(revision: u64) -> &'static str {
    if revision % 2 == 0 {
        "chat-log-enter-a"
    } else {
        "chat-log-enter-b"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_append_switches_class() {
        for revision in 0..6 {
            assert_ne!(chat_log_enter(revision), chat_log_enter(revision + 1));
        }
    }

    #[test]
    fn test_same_revision_keeps_class() {
        assert_eq!(chat_log_enter(4), chat_log_enter(4));
    }
}
