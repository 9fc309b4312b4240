use anyhow::Result;
use teloxide::prelude::*;

use super::render::deliver;
use crate::list::Action;
use crate::service::ListService;

pub async fn start(bot: Bot, msg: Message, service: ListService) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "Sending main menu");
    let replies = service.handle(Action::Start).await;
    deliver(&bot, msg.chat.id, None, replies).await
}

pub async fn handle_text(bot: Bot, msg: Message, service: ListService) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let text = text.trim();
    tracing::trace!(chat_id = msg.chat.id.0, ?text, "Text message");
    let replies = service.handle_text(text).await;
    deliver(&bot, msg.chat.id, None, replies).await
}
