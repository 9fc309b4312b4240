use crate::service::ListService;
use crate::store::{connect_db, ListRecord, SqliteStore, Store};

pub async fn init_test_store() -> Store {
    let pool = connect_db("sqlite::memory:", 1)
        .await
        .expect("failed to create in-memory database");
    let store = SqliteStore::init(pool)
        .await
        .expect("failed to create lists table");
    Store::Sqlite(store)
}

/// Service over a fresh in-memory store, optionally seeded with `text`.
pub async fn init_test_service(text: Option<&str>) -> ListService {
    let store = init_test_store().await;
    if let Some(text) = text {
        store
            .save(&ListRecord::new(text))
            .await
            .expect("failed to seed list");
    }
    ListService::load(store)
        .await
        .expect("failed to load service")
}
