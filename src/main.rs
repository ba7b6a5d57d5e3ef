//! StoreBuddy Support Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn};

use StoreBuddy::{
    config::Settings,
    utils::logging,
    services::{FixedDelay, TelegramGateway},
    state::StateStorage,
    templates::Templates,
    handlers::{ConversationEngine, handle_message},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", StoreBuddy::info());

    // Load reply templates
    info!("Loading reply templates...");
    let templates = Templates::load(&settings.templates).await?;
    info!(language = templates.language(), "Templates ready");

    // Initialize bot and conversation engine
    let bot = Bot::new(&settings.bot.token);
    let state_storage = StateStorage::new();
    let engine = ConversationEngine::new(
        &settings.conversation,
        state_storage.clone(),
        Arc::new(templates),
        Arc::new(TelegramGateway::new(bot.clone())),
        Arc::new(FixedDelay(settings.conversation.pacing_delay())),
    )?;

    // Updates from one chat are handled sequentially, different chats run concurrently
    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![Arc::new(engine)])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("StoreBuddy bot is ready, starting polling...");

    dispatcher.dispatch().await;

    let stats = state_storage.get_stats().await;
    info!(active_sessions = stats.active_sessions, "StoreBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    Update::filter_message().endpoint(handle_messages)
}

/// Handle regular messages
async fn handle_messages(msg: Message, engine: Arc<ConversationEngine>) -> HandlerResult {
    handle_message(msg, engine).await;
    Ok(())
}
