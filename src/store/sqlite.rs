use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

use super::{ListRecord, GLOBAL_KEY};
use crate::error::StoreError;

/// Ask SQLite to create the database file unless the URL already picks a
/// mode or points at an in-memory database.
pub fn prepare_sqlite_url(url: &str) -> String {
    let on_disk = url.starts_with("sqlite:") && !url.contains(":memory:");
    if !on_disk || url.contains("mode=") {
        return url.to_string();
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}mode=rwc")
}

pub async fn connect_db(db_url: &str, max_connections: u32) -> Result<Pool<Sqlite>, sqlx::Error> {
    tracing::debug!(db_url = %db_url, "Connecting to database");
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await
}

#[derive(sqlx::FromRow)]
struct ListRow {
    text: String,
}

/// Key-value table holding the shared list under [`GLOBAL_KEY`].
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Wrap `pool`, creating the `lists` table if needed.
    pub async fn init(pool: Pool<Sqlite>) -> Result<Self, StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS lists(
                key   TEXT PRIMARY KEY,
                text  TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }

    pub async fn load(&self) -> Result<Option<ListRecord>, StoreError> {
        tracing::trace!("Loading list row");
        let row = sqlx::query_as::<_, ListRow>("SELECT text FROM lists WHERE key = ?")
            .bind(GLOBAL_KEY)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| ListRecord::new(r.text)))
    }

    pub async fn save(&self, record: &ListRecord) -> Result<(), StoreError> {
        tracing::debug!(bytes = record.text.len(), "Saving list row");
        sqlx::query(
            "INSERT INTO lists (key, text) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET text = excluded.text",
        )
        .bind(GLOBAL_KEY)
        .bind(&record.text)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
