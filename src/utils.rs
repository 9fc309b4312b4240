use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardMarkup, MessageId},
};

/// Attempt to edit a message and log a warning on failure.
///
/// Without `markup` Telegram drops the message's inline keyboard.
pub async fn try_edit_message(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: impl Into<String>,
    markup: Option<InlineKeyboardMarkup>,
) {
    let mut request = bot.edit_message_text(chat_id, message_id, text);
    if let Some(markup) = markup {
        request = request.reply_markup(markup);
    }
    if let Err(err) = request.await {
        tracing::warn!(
            error = %err,
            chat_id = chat_id.0,
            message_id = message_id.0,
            "Failed to edit message",
        );
    }
}
