//! Telegram dialogue for the name styler bot
//!
//! `dialogue` holds the pure conversation control flow; `telegram` wires it
//! to the Bot API.

pub mod dialogue;
pub mod telegram;

pub use dialogue::{Event, Keyboard, Reply};
pub use telegram::{connect, run, Command};
