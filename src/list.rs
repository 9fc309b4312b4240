//! The shared shopping list as a small state machine.
//!
//! [`ListState`] owns the input mode, the last persisted [`ListRecord`] and
//! the in-memory [`PendingPurchase`] working copy. It never touches the
//! network or the disk: [`ListState::step`] either answers directly or asks
//! the caller to persist a new record and report back through
//! [`ListState::commit`] or [`ListState::save_failed`].
//!
//! All of this state is process-wide, so one user starting an edit makes the
//! next plain message from *any* chat become the new list.

use crate::messages::{
    ALL_PURCHASED, CONGRATULATIONS, GREETING, LIST_EMPTY, LIST_NOT_SET, LIST_SAVE_FAILED,
    LIST_UPDATED, MENU_EDIT_LIST, MENU_SHOW_BUTTONS, MENU_SHOW_LIST, NEW_LIST_BLANK,
    NO_ACTIVE_LIST, PICK_PURCHASED, SEND_NEW_LIST, UNKNOWN_COMMAND,
};
use crate::store::ListRecord;

/// Telegram refuses callback payloads longer than this many bytes.
pub const CALLBACK_DATA_LIMIT: usize = 64;

/// Payload carried by an item's button: the literal item text, cut on a
/// char boundary when it does not fit into [`CALLBACK_DATA_LIMIT`].
pub fn callback_key(item: &str) -> &str {
    if item.len() <= CALLBACK_DATA_LIMIT {
        return item;
    }
    let mut end = CALLBACK_DATA_LIMIT;
    while !item.is_char_boundary(end) {
        end -= 1;
    }
    &item[..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Idle,
    AwaitingNewList,
}

/// Items not yet bought in the current button session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPurchase {
    items: Vec<String>,
}

impl PendingPurchase {
    /// `None` when the record has no item lines.
    pub fn from_record(record: &ListRecord) -> Option<Self> {
        let items = record.items();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every item whose button carries `key`; duplicates go together.
    /// Returns how many entries were removed.
    pub fn purchase(&mut self, key: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| callback_key(item) != key);
        before - self.items.len()
    }
}

/// One interpreted user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Start,
    ShowList,
    ShowItemButtons,
    BeginEdit,
    SubmitNewList(String),
    UnrecognizedText(String),
    PurchaseItem(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// No keyboard; on an edit this removes the inline buttons.
    None,
    MainMenu,
    /// One inline button per item, labelled with the item text.
    Items(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub text: String,
    pub markup: Markup,
}

impl Outgoing {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            markup: Markup::None,
        }
    }

    fn with_menu(text: &str) -> Self {
        Self {
            text: text.to_string(),
            markup: Markup::MainMenu,
        }
    }

    fn item_buttons(items: &[String]) -> Self {
        Self {
            text: PICK_PURCHASED.to_string(),
            markup: Markup::Items(items.to_vec()),
        }
    }
}

/// Render instruction for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// New message in the conversation the event came from.
    Send(Outgoing),
    /// Replace the message whose button was clicked.
    EditClicked(Outgoing),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(Vec<Reply>),
    /// Persist this record, then call [`ListState::commit`] or
    /// [`ListState::save_failed`].
    Save(ListRecord),
}

#[derive(Debug, Clone, Default)]
pub struct ListState {
    mode: InputMode,
    record: Option<ListRecord>,
    pending: Option<PendingPurchase>,
}

impl ListState {
    pub fn new(record: Option<ListRecord>) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn record(&self) -> Option<&ListRecord> {
        self.record.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingPurchase> {
        self.pending.as_ref()
    }

    /// Map a plain text message to an action. Menu labels win even while a
    /// new list is awaited.
    pub fn interpret(&self, text: &str) -> Action {
        match text {
            MENU_EDIT_LIST => Action::BeginEdit,
            MENU_SHOW_BUTTONS => Action::ShowItemButtons,
            MENU_SHOW_LIST => Action::ShowList,
            _ if text.starts_with('/') => Action::UnrecognizedText(text.to_string()),
            _ if self.mode == InputMode::AwaitingNewList => {
                Action::SubmitNewList(text.to_string())
            }
            _ => Action::UnrecognizedText(text.to_string()),
        }
    }

    pub fn step(&mut self, action: Action) -> Step {
        let reply = match action {
            Action::Start => Reply::Send(Outgoing::with_menu(GREETING)),
            Action::ShowList => match &self.record {
                Some(record) => Reply::Send(Outgoing::plain(&record.text)),
                None => Reply::Send(Outgoing::plain(LIST_NOT_SET)),
            },
            Action::ShowItemButtons => self.show_item_buttons(),
            Action::BeginEdit => {
                self.mode = InputMode::AwaitingNewList;
                Reply::Send(Outgoing::plain(SEND_NEW_LIST))
            }
            Action::SubmitNewList(text) if self.mode == InputMode::AwaitingNewList => {
                if text.trim().is_empty() {
                    Reply::Send(Outgoing::plain(NEW_LIST_BLANK))
                } else {
                    return Step::Save(ListRecord::new(text));
                }
            }
            Action::SubmitNewList(_) | Action::UnrecognizedText(_) => {
                Reply::Send(Outgoing::plain(UNKNOWN_COMMAND))
            }
            Action::PurchaseItem(key) => return Step::Reply(self.purchase(&key)),
        };
        Step::Reply(vec![reply])
    }

    /// Adopt `record` once it has been persisted.
    pub fn commit(&mut self, record: ListRecord) -> Vec<Reply> {
        self.record = Some(record);
        self.mode = InputMode::Idle;
        vec![Reply::Send(Outgoing::with_menu(LIST_UPDATED))]
    }

    /// The save did not happen: keep the old record and keep waiting so the
    /// user can resend.
    pub fn save_failed(&self) -> Vec<Reply> {
        vec![Reply::Send(Outgoing::plain(LIST_SAVE_FAILED))]
    }

    fn show_item_buttons(&mut self) -> Reply {
        let Some(pending) = self.record.as_ref().and_then(PendingPurchase::from_record) else {
            return Reply::Send(Outgoing::plain(LIST_EMPTY));
        };
        let reply = Reply::Send(Outgoing::item_buttons(pending.items()));
        self.pending = Some(pending);
        reply
    }

    fn purchase(&mut self, key: &str) -> Vec<Reply> {
        let Some(pending) = self.pending.as_mut() else {
            return vec![Reply::EditClicked(Outgoing::plain(NO_ACTIVE_LIST))];
        };
        let removed = pending.purchase(key);
        tracing::debug!(removed, remaining = pending.items().len(), "Item purchased");
        if pending.is_empty() {
            self.pending = None;
            return vec![
                Reply::EditClicked(Outgoing::plain(ALL_PURCHASED)),
                Reply::Send(Outgoing::plain(CONGRATULATIONS)),
            ];
        }
        vec![Reply::EditClicked(Outgoing::item_buttons(pending.items()))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replies(step: Step) -> Vec<Reply> {
        match step {
            Step::Reply(replies) => replies,
            Step::Save(record) => panic!("unexpected save of {record:?}"),
        }
    }

    fn sent_text(step: Step) -> String {
        match replies(step).as_slice() {
            [Reply::Send(out)] => out.text.clone(),
            other => panic!("expected a single sent message, got {other:?}"),
        }
    }

    fn submit(state: &mut ListState, text: &str) -> Vec<Reply> {
        state.step(Action::BeginEdit);
        match state.step(Action::SubmitNewList(text.to_string())) {
            Step::Save(record) => state.commit(record),
            other => panic!("expected save, got {other:?}"),
        }
    }

    fn sample() -> ListState {
        ListState::new(Some(ListRecord::new("2024-01-01\nmilk\nbread\nmilk")))
    }

    fn item_markup(step: Step) -> Vec<String> {
        match replies(step).as_slice() {
            [Reply::Send(Outgoing {
                markup: Markup::Items(items),
                ..
            })]
            | [Reply::EditClicked(Outgoing {
                markup: Markup::Items(items),
                ..
            })] => items.clone(),
            other => panic!("expected item buttons, got {other:?}"),
        }
    }

    #[test]
    fn show_list_without_record_says_not_set() {
        let mut state = ListState::default();
        assert_eq!(sent_text(state.step(Action::ShowList)), LIST_NOT_SET);
    }

    #[test]
    fn show_list_returns_raw_text() {
        let mut state = sample();
        assert_eq!(
            sent_text(state.step(Action::ShowList)),
            "2024-01-01\nmilk\nbread\nmilk"
        );
    }

    #[test]
    fn submitted_list_round_trips() {
        let mut state = ListState::default();
        let out = submit(&mut state, "Sat\nEggs\n\nTea ");
        assert_eq!(
            out,
            vec![Reply::Send(Outgoing {
                text: LIST_UPDATED.to_string(),
                markup: Markup::MainMenu,
            })]
        );
        assert_eq!(state.mode(), InputMode::Idle);
        assert_eq!(sent_text(state.step(Action::ShowList)), "Sat\nEggs\n\nTea ");
    }

    #[test]
    fn show_buttons_derives_items_after_label() {
        let mut state = sample();
        let items = item_markup(state.step(Action::ShowItemButtons));
        assert_eq!(items, vec!["milk", "bread", "milk"]);
        assert_eq!(state.pending().unwrap().items(), ["milk", "bread", "milk"]);
    }

    #[test]
    fn show_buttons_twice_is_stable() {
        let mut state = sample();
        let first = state.step(Action::ShowItemButtons);
        let second = state.step(Action::ShowItemButtons);
        assert_eq!(first, second);
    }

    #[test]
    fn show_buttons_discards_progress() {
        let mut state = sample();
        state.step(Action::ShowItemButtons);
        state.step(Action::PurchaseItem("bread".into()));
        assert_eq!(state.pending().unwrap().items(), ["milk", "milk"]);

        state.step(Action::ShowItemButtons);
        assert_eq!(state.pending().unwrap().items(), ["milk", "bread", "milk"]);
    }

    #[test]
    fn show_buttons_on_missing_or_label_only_list() {
        let mut state = ListState::default();
        assert_eq!(sent_text(state.step(Action::ShowItemButtons)), LIST_EMPTY);
        assert!(state.pending().is_none());

        let mut state = ListState::new(Some(ListRecord::new("Friday")));
        assert_eq!(sent_text(state.step(Action::ShowItemButtons)), LIST_EMPTY);
        assert!(state.pending().is_none());
    }

    #[test]
    fn label_only_list_keeps_previous_pending() {
        let mut state = sample();
        state.step(Action::ShowItemButtons);
        submit(&mut state, "Friday");
        state.step(Action::ShowItemButtons);
        assert_eq!(state.pending().unwrap().items(), ["milk", "bread", "milk"]);
    }

    #[test]
    fn purchase_removes_every_duplicate() {
        let mut state = sample();
        state.step(Action::ShowItemButtons);
        let items = item_markup(state.step(Action::PurchaseItem("milk".into())));
        assert_eq!(items, vec!["bread"]);
        assert_eq!(state.record().unwrap().text, "2024-01-01\nmilk\nbread\nmilk");
    }

    #[test]
    fn purchasing_last_item_celebrates_once() {
        let mut state = ListState::new(Some(ListRecord::new("Mon\nbread")));
        state.step(Action::ShowItemButtons);
        let out = replies(state.step(Action::PurchaseItem("bread".into())));
        assert_eq!(
            out,
            vec![
                Reply::EditClicked(Outgoing::plain(ALL_PURCHASED)),
                Reply::Send(Outgoing::plain(CONGRATULATIONS)),
            ]
        );
        assert!(state.pending().is_none());

        let again = replies(state.step(Action::PurchaseItem("bread".into())));
        assert_eq!(again, vec![Reply::EditClicked(Outgoing::plain(NO_ACTIVE_LIST))]);
    }

    #[test]
    fn purchase_without_session_reports_no_active_list() {
        let mut state = sample();
        let out = replies(state.step(Action::PurchaseItem("milk".into())));
        assert_eq!(out, vec![Reply::EditClicked(Outgoing::plain(NO_ACTIVE_LIST))]);
    }

    #[test]
    fn unknown_key_rerenders_remaining_items() {
        let mut state = sample();
        state.step(Action::ShowItemButtons);
        let items = item_markup(state.step(Action::PurchaseItem("cheese".into())));
        assert_eq!(items, vec!["milk", "bread", "milk"]);
    }

    #[test]
    fn long_items_match_by_truncated_key() {
        let long = "я".repeat(40);
        let key = callback_key(&long);
        assert!(key.len() <= CALLBACK_DATA_LIMIT);
        assert!(long.starts_with(key));

        let mut state = ListState::new(Some(ListRecord::new(format!("Mon\n{long}\ntea"))));
        state.step(Action::ShowItemButtons);
        let items = item_markup(state.step(Action::PurchaseItem(key.to_string())));
        assert_eq!(items, vec!["tea"]);
    }

    #[test]
    fn show_list_does_not_cancel_pending_edit() {
        let mut state = sample();
        state.step(Action::BeginEdit);
        let shown = sent_text(state.step(Action::ShowList));
        assert_eq!(shown, "2024-01-01\nmilk\nbread\nmilk");
        assert_eq!(state.mode(), InputMode::AwaitingNewList);
    }

    #[test]
    fn interpret_follows_mode() {
        let mut state = ListState::default();
        assert_eq!(state.interpret(MENU_SHOW_LIST), Action::ShowList);
        assert_eq!(state.interpret(MENU_SHOW_BUTTONS), Action::ShowItemButtons);
        assert_eq!(state.interpret(MENU_EDIT_LIST), Action::BeginEdit);
        assert_eq!(
            state.interpret("hello"),
            Action::UnrecognizedText("hello".into())
        );

        state.step(Action::BeginEdit);
        assert_eq!(
            state.interpret("Mon\nmilk"),
            Action::SubmitNewList("Mon\nmilk".into())
        );
        assert_eq!(state.interpret(MENU_SHOW_LIST), Action::ShowList);
        assert_eq!(
            state.interpret("/help"),
            Action::UnrecognizedText("/help".into())
        );
    }

    #[test]
    fn unrecognized_text_changes_nothing() {
        let mut state = sample();
        assert_eq!(
            sent_text(state.step(Action::UnrecognizedText("hi".into()))),
            UNKNOWN_COMMAND
        );
        assert_eq!(state.mode(), InputMode::Idle);
    }

    #[test]
    fn submit_while_idle_is_unknown() {
        let mut state = sample();
        assert_eq!(
            sent_text(state.step(Action::SubmitNewList("Mon\nmilk".into()))),
            UNKNOWN_COMMAND
        );
        assert_eq!(state.record().unwrap().text, "2024-01-01\nmilk\nbread\nmilk");
    }

    #[test]
    fn blank_submission_keeps_waiting() {
        let mut state = sample();
        state.step(Action::BeginEdit);
        assert_eq!(
            sent_text(state.step(Action::SubmitNewList("  \n ".into()))),
            NEW_LIST_BLANK
        );
        assert_eq!(state.mode(), InputMode::AwaitingNewList);
    }

    #[test]
    fn failed_save_keeps_old_record_and_mode() {
        let mut state = sample();
        state.step(Action::BeginEdit);
        let step = state.step(Action::SubmitNewList("Tue\ntea".into()));
        assert!(matches!(step, Step::Save(_)));
        assert_eq!(
            state.save_failed(),
            vec![Reply::Send(Outgoing::plain(LIST_SAVE_FAILED))]
        );
        assert_eq!(state.mode(), InputMode::AwaitingNewList);
        assert_eq!(state.record().unwrap().text, "2024-01-01\nmilk\nbread\nmilk");
    }

    #[test]
    fn start_sends_greeting_with_menu() {
        let mut state = ListState::default();
        state.step(Action::BeginEdit);
        let out = replies(state.step(Action::Start));
        assert_eq!(out, vec![Reply::Send(Outgoing::with_menu(GREETING))]);
        assert_eq!(state.mode(), InputMode::AwaitingNewList);
    }
}
