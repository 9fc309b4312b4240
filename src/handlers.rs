use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::commands::Command;
use crate::service::ListService;

pub mod callback;
pub mod keyboard;
pub mod render;
pub mod text;

pub use callback::callback_handler;
pub use keyboard::{item_keyboard, main_menu};
pub use render::deliver;
pub use text::{handle_text, start};

/// Update routing: button clicks, `/start`, then any other text.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(
                            |bot: Bot, msg: Message, cmd: Command, service: ListService| async move {
                                match cmd {
                                    Command::Start => start(bot, msg, service).await,
                                }
                            },
                        ),
                )
                .branch(
                    dptree::filter(|msg: Message| msg.text().is_some()).endpoint(handle_text),
                ),
        )
}
