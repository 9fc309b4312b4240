// Persistence for the single shared shopping list

use crate::error::StoreError;

pub mod json_file;
pub mod sqlite;

pub use json_file::JsonFileStore;
pub use sqlite::{connect_db, prepare_sqlite_url, SqliteStore};

/// Key under which the shared list is stored in every backend.
pub const GLOBAL_KEY: &str = "global";

/// The shared list as typed by the user: first line is a free-form
/// label (usually a date), the rest are item names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRecord {
    pub text: String,
}

impl ListRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Item lines of the list in order, blank lines skipped.
    pub fn items(&self) -> Vec<String> {
        self.text
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Clone, Debug)]
pub enum Store {
    Json(JsonFileStore),
    Sqlite(SqliteStore),
}

impl Store {
    /// Open the backend selected by `url`: `sqlite:` URLs use SQLite,
    /// anything else is a path to a JSON file.
    pub async fn open(url: &str) -> Result<Self, StoreError> {
        if url.starts_with("sqlite:") {
            let url = prepare_sqlite_url(url);
            tracing::info!(store = %url, "Using SQLite list store");
            let pool = connect_db(&url, 5).await?;
            Ok(Store::Sqlite(SqliteStore::init(pool).await?))
        } else {
            tracing::info!(store = %url, "Using JSON list store");
            Ok(Store::Json(JsonFileStore::new(url)))
        }
    }

    pub async fn load(&self) -> Result<Option<ListRecord>, StoreError> {
        match self {
            Store::Json(store) => store.load(),
            Store::Sqlite(store) => store.load().await,
        }
    }

    pub async fn save(&self, record: &ListRecord) -> Result<(), StoreError> {
        match self {
            Store::Json(store) => {
                let store = store.clone();
                let record = record.clone();
                let path = store.path().to_path_buf();
                tokio::task::spawn_blocking(move || store.save(&record))
                    .await
                    .map_err(|err| StoreError::Write {
                        path,
                        source: std::io::Error::other(err),
                    })?
            }
            Store::Sqlite(store) => store.save(record).await,
        }
    }
}
