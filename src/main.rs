//! SubDesk Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::utils::command::BotCommands as TeloxideBotCommands;
use tracing::{error, info, warn};

use SubDesk::{
    config::Settings,
    conversation::ConversationController,
    database::{connection, DatabaseService},
    handlers::messages,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file appender alive.
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting SubDesk Telegram Bot...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = connection::DatabaseConfig {
        url: settings.database.url.clone(),
        max_connections: settings.database.max_connections,
        min_connections: settings.database.min_connections,
        ..Default::default()
    };
    let db_pool = connection::create_pool(&db_config).await?;

    // Run database migrations
    connection::run_migrations(&db_pool).await?;

    // Initialize the entity store and the conversation controller
    let database_service = DatabaseService::new(db_pool);
    let controller = Arc::new(ConversationController::new(database_service));

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    info!("Setting up bot handlers...");
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![controller])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("SubDesk bot is ready, starting polling...");
    dispatcher.dispatch().await;

    info!("SubDesk bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry().branch(
        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<BotCommands>()
                    .endpoint(handle_commands),
            )
            .branch(dptree::endpoint(handle_messages)),
    )
}

#[derive(TeloxideBotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "SubDesk Bot Commands")]
enum BotCommands {
    #[command(description = "Start the bot and show the main menu")]
    Start,
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: BotCommands,
    controller: Arc<ConversationController<DatabaseService>>,
) -> HandlerResult {
    let result = match cmd {
        BotCommands::Start => messages::handle_start(bot, msg, controller).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    controller: Arc<ConversationController<DatabaseService>>,
) -> HandlerResult {
    if let Err(e) = messages::handle_message(bot, msg, controller).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}
