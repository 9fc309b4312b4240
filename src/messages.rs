//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update. Menu labels double as commands, so they must match exactly.

pub const MENU_EDIT_LIST: &str = "Изменить список";
pub const MENU_SHOW_BUTTONS: &str = "Показать кнопки товаров";
pub const MENU_SHOW_LIST: &str = "Показать список";

pub const START_DESCRIPTION: &str = "Запустить бота";

pub const GREETING: &str = "Привет! Это общий список покупок для всех пользователей.";
pub const LIST_NOT_SET: &str = "Список пока не задан.";
pub const LIST_EMPTY: &str = "Список пуст.";
pub const SEND_NEW_LIST: &str = "Отправьте новый список (первая строка — дата, далее — товары).";
pub const NEW_LIST_BLANK: &str = "Список не может быть пустым. Отправьте новый список.";
pub const LIST_UPDATED: &str = "Список обновлён!";
pub const LIST_SAVE_FAILED: &str =
    "Не удалось сохранить список. Попробуйте отправить его ещё раз.";
pub const UNKNOWN_COMMAND: &str = "Неизвестная команда. Используйте меню.";
pub const PICK_PURCHASED: &str = "Выберите купленный товар:";
pub const ALL_PURCHASED: &str = "Все товары куплены! 🎉";
pub const CONGRATULATIONS: &str = "🎊 Поздравляем! Список выполнен.";
pub const NO_ACTIVE_LIST: &str = "Нет активного списка.";
