//! Per-conversation dialogue state

use std::collections::HashMap;
use tokio::sync::RwLock;

/// Dialogue state for a single conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No dialogue in progress
    #[default]
    Idle,
    /// The bot asked for a name and is waiting for the reply
    AwaitingName,
}

/// In-memory registry of dialogue states, keyed by conversation id.
///
/// Conversations never see each other's state. An absent key is equivalent
/// to `Idle`, so finished or cancelled dialogues are simply removed.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    states: RwLock<HashMap<String, SessionState>>,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Session key for a Telegram chat
    pub fn key_for_chat(chat_id: i64) -> String {
        format!("telegram:{chat_id}")
    }

    /// Get the current state for a conversation
    pub async fn get(&self, key: &str) -> SessionState {
        self.states
            .read()
            .await
            .get(key)
            .copied()
            .unwrap_or_default()
    }

    /// Store the state for a conversation
    pub async fn set(&self, key: &str, state: SessionState) {
        let mut states = self.states.write().await;
        match state {
            SessionState::Idle => {
                states.remove(key);
            }
            other => {
                states.insert(key.to_string(), other);
            }
        }
    }

    /// Number of conversations with a dialogue in progress
    pub async fn active_count(&self) -> usize {
        self.states.read().await.len()
    }
}
