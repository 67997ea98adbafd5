//! Message handlers module
//!
//! Bridges Telegram updates and the conversation controller: extracts
//! (operator id, text) from an incoming message, lets the controller advance
//! the flow, and sends the resulting replies with their keyboards.
//!
//! Each event runs inside an error boundary: an unexpected failure is
//! logged, answered with a generic message, and never takes down the event
//! loop.

use std::sync::Arc;
use teloxide::{prelude::*, types::Message, Bot};
use tracing::{debug, error, warn};

use crate::conversation::{texts, ConversationController, Reply};
use crate::database::DatabaseService;
use crate::handlers::keyboards;
use crate::utils::errors::Result;

/// Handle an incoming text message.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    controller: Arc<ConversationController<DatabaseService>>,
) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = ?msg.chat.id, "Message without a sender, ignoring");
        return Ok(());
    };

    // The record desk is a one-on-one tool; group chatter is ignored.
    if !msg.chat.id.is_user() {
        return Ok(());
    }

    let Some(text) = msg.text() else {
        debug!(chat_id = ?msg.chat.id, "Non-text message, ignoring");
        return Ok(());
    };

    let operator_id = user.id.0 as i64;
    debug!(operator_id, "Processing message");

    let replies = match controller.handle_event(operator_id, text).await {
        Ok(replies) => replies,
        Err(e) => {
            error!(operator_id, error = %e, "Event processing failed");
            vec![Reply::text(texts::INTERNAL_ERROR)]
        }
    };

    send_replies(&bot, msg.chat.id, replies).await
}

/// Handle the /start command.
pub async fn handle_start(
    bot: Bot,
    msg: Message,
    controller: Arc<ConversationController<DatabaseService>>,
) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    if !msg.chat.id.is_user() {
        warn!(chat_id = ?msg.chat.id, "/start outside a private chat, ignoring");
        return Ok(());
    }

    let operator_id = user.id.0 as i64;
    let replies = controller.start(operator_id);
    send_replies(&bot, msg.chat.id, replies).await
}

async fn send_replies(bot: &Bot, chat_id: ChatId, replies: Vec<Reply>) -> Result<()> {
    for reply in replies {
        let request = bot.send_message(chat_id, reply.text);
        match reply.screen {
            Some(screen) => {
                request
                    .reply_markup(keyboards::screen_keyboard(screen))
                    .await?
            }
            None => request.await?,
        };
    }

    Ok(())
}
