//! Conversation control flow
//!
//! A single router maps the current state and an inbound event to the reply
//! messages and the next state, one conversation at a time. Everything here
//! is pure; the Telegram wiring lives in [`crate::telegram`].

use name_styler_core::session::SessionState;
use name_styler_core::styles::style_name;

const WELCOME: &str = "👋 Welcome to the Name Styler Bot!\n\n\
    I can display your name in different cool styles. \
    Please send me your name:";

const INVALID_NAME: &str = "Please send me a valid name!";

const TRY_ANOTHER: &str = "Want to try another name? Use /start to begin again!";

const CANCELLED: &str = "Operation cancelled. Use /start to begin again!";

const HELP: &str = "🤖 Name Styler Bot Help\n\n\
    • Use /start to begin and enter your name\n\
    • I'll show your name in different cool styles\n\
    • You can try as many names as you want!\n\n\
    Just type /start to begin the fun!";

/// Inbound events the dialogue understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The entry command (`/start`)
    Start,
    /// The help command (`/help`)
    Help,
    /// The cancel command (`/cancel`)
    Cancel,
    /// A free-text message
    Text(String),
}

/// Reply keyboard attached to the final message of a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyboard {
    None,
    /// A single `/start` button
    Start,
    /// `/start` and `/help` buttons
    StartHelp,
}

/// What to send back, in order, and the state to store afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub messages: Vec<String>,
    pub keyboard: Keyboard,
    pub next_state: SessionState,
}

impl Reply {
    fn message(text: impl Into<String>, next_state: SessionState) -> Self {
        Self {
            messages: vec![text.into()],
            keyboard: Keyboard::None,
            next_state,
        }
    }
}

/// Route one event through the dialogue for a single conversation.
pub fn respond(state: SessionState, event: &Event) -> Reply {
    match event {
        Event::Start => Reply::message(WELCOME, SessionState::AwaitingName),
        Event::Help => Reply::message(HELP, state),
        Event::Cancel => Reply {
            messages: vec![CANCELLED.to_string()],
            keyboard: Keyboard::Start,
            next_state: SessionState::Idle,
        },
        Event::Text(body) => match state {
            SessionState::AwaitingName => handle_name(body),
            // Free text outside the dialogue is not ours to answer
            SessionState::Idle => Reply {
                messages: Vec::new(),
                keyboard: Keyboard::None,
                next_state: SessionState::Idle,
            },
        },
    }
}

fn handle_name(body: &str) -> Reply {
    let name = body.trim();
    if name.is_empty() {
        return Reply::message(INVALID_NAME, SessionState::AwaitingName);
    }

    Reply {
        messages: vec![styles_message(name), TRY_ANOTHER.to_string()],
        keyboard: Keyboard::StartHelp,
        next_state: SessionState::Idle,
    }
}

fn styles_message(name: &str) -> String {
    let lines = style_name(name)
        .iter()
        .map(|style| format!("{}: {}", style.label, style.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!("✨ Here's your name in different styles, {name}!\n\n{lines}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_prompts_and_awaits_name() {
        let reply = respond(SessionState::Idle, &Event::Start);
        assert_eq!(reply.next_state, SessionState::AwaitingName);
        assert_eq!(reply.messages.len(), 1);
        assert!(reply.messages[0].contains("Please send me your name"));
    }

    #[test]
    fn test_start_is_idempotent_while_awaiting_name() {
        let first = respond(SessionState::Idle, &Event::Start);
        let again = respond(SessionState::AwaitingName, &Event::Start);
        assert_eq!(again, first);
        assert_eq!(again.next_state, SessionState::AwaitingName);
    }

    #[test]
    fn test_name_produces_styles_and_follow_up() {
        let reply = respond(SessionState::AwaitingName, &Event::Text("Ana".to_string()));
        assert_eq!(reply.next_state, SessionState::Idle);
        assert_eq!(reply.messages.len(), 2);

        let styled = &reply.messages[0];
        assert!(styled.starts_with("✨ Here's your name in different styles, Ana!"));
        assert!(styled.contains("🔸 UPPERCASE: ANA"));
        assert!(styled.contains("🔹 AlTeRnAtInG: AnA"));
        assert!(styled.contains("🔸 Spaced Out: A n a"));

        assert!(reply.messages[1].contains("/start"));
        assert_eq!(reply.keyboard, Keyboard::StartHelp);
    }

    #[test]
    fn test_name_is_trimmed_before_styling() {
        let reply = respond(
            SessionState::AwaitingName,
            &Event::Text("  Ana  ".to_string()),
        );
        assert!(reply.messages[0].contains("styles, Ana!"));
    }

    #[test]
    fn test_whitespace_name_keeps_awaiting() {
        let reply = respond(SessionState::AwaitingName, &Event::Text("   ".to_string()));
        assert_eq!(reply.next_state, SessionState::AwaitingName);
        assert_eq!(reply.messages, vec![INVALID_NAME.to_string()]);
    }

    #[test]
    fn test_cancel_while_awaiting_returns_to_idle() {
        let reply = respond(SessionState::AwaitingName, &Event::Cancel);
        assert_eq!(reply.next_state, SessionState::Idle);
        assert!(reply.messages[0].contains("cancelled"));
        assert_eq!(reply.keyboard, Keyboard::Start);
    }

    #[test]
    fn test_cancel_while_idle_still_acknowledges() {
        let reply = respond(SessionState::Idle, &Event::Cancel);
        assert_eq!(reply.next_state, SessionState::Idle);
        assert!(reply.messages[0].contains("cancelled"));
    }

    #[test]
    fn test_help_does_not_change_state() {
        for state in [SessionState::Idle, SessionState::AwaitingName] {
            let reply = respond(state, &Event::Help);
            assert_eq!(reply.next_state, state);
            assert!(reply.messages[0].contains("Name Styler Bot Help"));
        }
    }

    #[test]
    fn test_free_text_while_idle_is_ignored() {
        let reply = respond(SessionState::Idle, &Event::Text("hello".to_string()));
        assert!(reply.messages.is_empty());
        assert_eq!(reply.next_state, SessionState::Idle);
    }
}
