//! Telegram wiring for the name styler dialogue

use crate::dialogue::{self, Event, Keyboard, Reply};
use name_styler_core::config::schema::TelegramConfig;
use name_styler_core::session::SessionRegistry;
use name_styler_core::{Error, Result};
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, ReplyMarkup};
use teloxide::utils::command::BotCommands;

/// Name styler bot commands
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Name Styler Bot commands:")]
pub enum Command {
    /// Start the dialogue
    #[command(description = "Begin and enter your name")]
    Start,
    /// Show available commands
    #[command(description = "Show this help message")]
    Help,
    /// Cancel the dialogue
    #[command(description = "Cancel the current dialogue")]
    Cancel,
}

impl From<&Command> for Event {
    fn from(cmd: &Command) -> Self {
        match cmd {
            Command::Start => Event::Start,
            Command::Help => Event::Help,
            Command::Cancel => Event::Cancel,
        }
    }
}

/// Connect to the Bot API: verify the token, register the command menu, and
/// optionally drop updates that queued up while the bot was offline.
pub async fn connect(config: &TelegramConfig) -> Result<Bot> {
    let bot = Bot::new(&config.token);

    match bot.get_me().await {
        Ok(me) => {
            let username = me.username.clone().unwrap_or_else(|| "unknown".to_string());
            tracing::info!("Telegram bot @{} connected", username);
        }
        Err(e) => {
            return Err(Error::Channel(format!("Failed to get bot info: {}", e)));
        }
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("Failed to set bot commands: {}", e);
    }

    if config.drop_pending_updates {
        if let Err(e) = bot.delete_webhook().drop_pending_updates(true).await {
            tracing::warn!("Failed to drop pending updates: {}", e);
        }
    }

    Ok(bot)
}

/// Run the long-poll dispatcher until the process is killed.
///
/// Per-update errors are logged and swallowed so a failing update never
/// takes the dispatcher down.
pub async fn run(bot: Bot, registry: Arc<SessionRegistry>) {
    tracing::info!("Starting Telegram dispatcher (polling mode)...");

    let registry_cmd = registry.clone();
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                    let registry = registry_cmd.clone();
                    async move {
                        let event = Event::from(&cmd);
                        if let Err(e) = dispatch_event(&bot, &registry, &msg, event).await {
                            tracing::error!("Error handling {:?}: {}", cmd, e);
                        }
                        Ok::<(), teloxide::RequestError>(())
                    }
                }),
        )
        .branch(
            Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                let registry = registry.clone();
                async move {
                    // Only plain text participates in the dialogue; unknown
                    // commands and media are not name payloads.
                    let Some(text) = msg.text() else {
                        return Ok(());
                    };
                    if text.starts_with('/') {
                        return Ok(());
                    }

                    let event = Event::Text(text.to_string());
                    if let Err(e) = dispatch_event(&bot, &registry, &msg, event).await {
                        tracing::error!("Error handling message: {}", e);
                    }
                    Ok::<(), teloxide::RequestError>(())
                }
            }),
        );

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// Route one update through the dialogue and deliver the reply.
///
/// The registry write happens after the reply is sent, so a failed send
/// leaves the conversation state unchanged.
async fn dispatch_event(
    bot: &Bot,
    registry: &SessionRegistry,
    msg: &Message,
    event: Event,
) -> Result<()> {
    let key = SessionRegistry::key_for_chat(msg.chat.id.0);
    let state = registry.get(&key).await;

    let reply = dialogue::respond(state, &event);
    if reply.messages.is_empty() {
        tracing::debug!("Ignoring free text outside a dialogue in {}", key);
        return Ok(());
    }

    send_reply(bot, msg.chat.id, &reply).await?;
    registry.set(&key, reply.next_state).await;

    Ok(())
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<()> {
    let last = reply.messages.len().saturating_sub(1);
    for (i, text) in reply.messages.iter().enumerate() {
        let mut request = bot.send_message(chat_id, text);
        if i == last {
            if let Some(markup) = keyboard_markup(reply.keyboard) {
                request = request.reply_markup(markup);
            }
        }
        request
            .await
            .map_err(|e| Error::Channel(format!("Failed to send message: {}", e)))?;
    }
    Ok(())
}

fn keyboard_markup(keyboard: Keyboard) -> Option<ReplyMarkup> {
    let row = match keyboard {
        Keyboard::None => return None,
        Keyboard::Start => vec![KeyboardButton::new("/start")],
        Keyboard::StartHelp => vec![
            KeyboardButton::new("/start"),
            KeyboardButton::new("/help"),
        ],
    };
    Some(ReplyMarkup::Keyboard(
        KeyboardMarkup::new(vec![row]).resize_keyboard(),
    ))
}
