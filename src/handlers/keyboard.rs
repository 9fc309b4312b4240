use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use crate::list::callback_key;
use crate::messages::{MENU_EDIT_LIST, MENU_SHOW_BUTTONS, MENU_SHOW_LIST};

/// One row per pending item, labelled with the item and carrying its
/// callback key.
pub fn item_keyboard(items: &[String]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(items.iter().map(|item| {
        [InlineKeyboardButton::callback(
            item.as_str(),
            callback_key(item),
        )]
    }))
}

pub fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::new(
        [MENU_EDIT_LIST, MENU_SHOW_BUTTONS, MENU_SHOW_LIST]
            .into_iter()
            .map(|label| vec![KeyboardButton::new(label)]),
    )
    .resize_keyboard()
}
