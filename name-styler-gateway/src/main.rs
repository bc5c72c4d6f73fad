//! Gateway entry point: runs the Telegram dispatcher and the liveness
//! endpoint as two independent tasks in one process.

mod server;

use anyhow::Result;
use name_styler_bot::telegram;
use name_styler_core::config::ConfigLoader;
use name_styler_core::logging::init_logging;
use name_styler_core::session::SessionRegistry;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Fatal before anything starts: a missing token must not reach the
    // listeners.
    let config = ConfigLoader::new().load()?;
    let _guard = init_logging(&config.logging);

    info!("Starting name styler gateway");

    let bot = telegram::connect(&config.telegram).await?;
    let registry = Arc::new(SessionRegistry::new());

    // The two listeners share no mutable state and never coordinate; the
    // process runs until killed.
    let bot_task = tokio::spawn(telegram::run(bot, registry));
    let server_config = config.server.clone();
    let server_task = tokio::spawn(async move { server::run_server(&server_config).await });

    let (bot_result, server_result) = tokio::join!(bot_task, server_task);

    if let Err(e) = bot_result {
        error!("Telegram dispatcher task failed: {}", e);
    }
    match server_result {
        Ok(Err(e)) => error!("Liveness server exited with error: {}", e),
        Err(e) => error!("Liveness server task failed: {}", e),
        Ok(Ok(())) => {}
    }

    Ok(())
}
