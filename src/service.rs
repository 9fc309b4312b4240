use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::list::{Action, ListState, Reply, Step};
use crate::store::Store;

/// Runs list actions against the shared state and the durable store.
///
/// Cheap to clone; every clone sees the same list.
#[derive(Clone)]
pub struct ListService {
    state: Arc<Mutex<ListState>>,
    store: Store,
}

impl ListService {
    /// Load the persisted list. A present but unreadable store is an error,
    /// not an empty list.
    pub async fn load(store: Store) -> Result<Self, StoreError> {
        let record = store.load().await?;
        tracing::info!(has_list = record.is_some(), "Loaded shared list");
        Ok(Self {
            state: Arc::new(Mutex::new(ListState::new(record))),
            store,
        })
    }

    pub async fn handle_text(&self, text: &str) -> Vec<Reply> {
        let mut state = self.state.lock().await;
        let action = state.interpret(text);
        self.run(&mut state, action).await
    }

    pub async fn handle(&self, action: Action) -> Vec<Reply> {
        let mut state = self.state.lock().await;
        self.run(&mut state, action).await
    }

    /// Snapshot of the current state, mostly for inspection in tests.
    pub async fn snapshot(&self) -> ListState {
        self.state.lock().await.clone()
    }

    async fn run(&self, state: &mut ListState, action: Action) -> Vec<Reply> {
        tracing::trace!(?action, mode = ?state.mode(), "Handling action");
        match state.step(action) {
            Step::Reply(replies) => replies,
            Step::Save(record) => match self.store.save(&record).await {
                Ok(()) => {
                    tracing::info!(items = record.items().len(), "Shared list replaced");
                    state.commit(record)
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to save shared list");
                    state.save_failed()
                }
            },
        }
    }
}
