use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId},
};

use super::keyboard::{item_keyboard, main_menu};
use crate::list::{Markup, Outgoing, Reply};
use crate::utils::try_edit_message;

/// Deliver replies to `chat_id`. `clicked` is the message whose button
/// triggered them, if any.
pub async fn deliver(
    bot: &Bot,
    chat_id: ChatId,
    clicked: Option<MessageId>,
    replies: Vec<Reply>,
) -> Result<()> {
    for reply in replies {
        match reply {
            Reply::Send(out) => send(bot, chat_id, out).await?,
            Reply::EditClicked(out) => match clicked {
                Some(message_id) => edit(bot, chat_id, message_id, out).await,
                None => {
                    tracing::debug!(chat_id = chat_id.0, "No clicked message, sending instead");
                    send(bot, chat_id, out).await?
                }
            },
        }
    }
    Ok(())
}

async fn send(bot: &Bot, chat_id: ChatId, out: Outgoing) -> Result<()> {
    let request = bot.send_message(chat_id, out.text);
    match out.markup {
        Markup::None => request.await?,
        Markup::MainMenu => request.reply_markup(main_menu()).await?,
        Markup::Items(items) => request.reply_markup(item_keyboard(&items)).await?,
    };
    Ok(())
}

async fn edit(bot: &Bot, chat_id: ChatId, message_id: MessageId, out: Outgoing) {
    let markup = match &out.markup {
        Markup::Items(items) => Some(item_keyboard(items)),
        // Reply keyboards cannot be attached to an edited message.
        Markup::None | Markup::MainMenu => None,
    };
    try_edit_message(bot, chat_id, message_id, out.text, markup).await;
}
