use anyhow::Result;
use teloxide::prelude::*;

use super::render::deliver;
use crate::list::Action;
use crate::service::ListService;

/// Handles callback queries from item buttons.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, service: ListService) -> Result<()> {
    // Stop the client's loading spinner before anything else.
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        tracing::warn!(error = %err, "Failed to answer callback query");
    }

    let (Some(data), Some(message)) = (q.data, q.message) else {
        return Ok(());
    };
    let chat_id = message.chat().id;
    tracing::debug!(chat_id = chat_id.0, item = %data, "Item button clicked");

    let replies = service.handle(Action::PurchaseItem(data)).await;
    deliver(&bot, chat_id, Some(message.id()), replies).await
}
