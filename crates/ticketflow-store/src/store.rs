use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;
use tracing::info;

use crate::commands;
use crate::error::{Result, StoreError};
use crate::models::{Category, NewTicket, PageRequest, TicketFilter, TicketPage, TicketPatch, TicketWithRelations};
use crate::queries;
use crate::traits::TicketStore;

/// SQLite-backed ticket store (single connection guarded by a mutex)
///
/// Every operation is its own round-trip: lock, run, unlock. Writers are
/// serialized by the mutex; there is no cross-call transaction.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create the database file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db_path: PathBuf = path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::Connection(format!("Failed to create database directory: {}", e)))?;
            }
        }

        info!("Opening ticket database at: {}", db_path.display());

        let conn = tokio::task::spawn_blocking(move || -> Result<Connection> {
            let conn = Connection::open(&db_path)?;

            // WAL mode for better concurrency between readers and the writer
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn.pragma_update(None, "synchronous", "NORMAL")?;

            // Referential integrity for ticket -> category / ticket -> user
            conn.pragma_update(None, "foreign_keys", "ON")?;

            Ok(conn)
        })
        .await
        .map_err(|e| StoreError::Internal(e.to_string()))??;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema().await?;

        Ok(store)
    }

    /// In-memory database, used by tests
    pub async fn open_in_memory() -> Result<Self> {
        let conn = tokio::task::spawn_blocking(|| -> Result<Connection> {
            let conn = Connection::open_in_memory()?;
            conn.pragma_update(None, "foreign_keys", "ON")?;
            Ok(conn)
        })
        .await
        .map_err(|e| StoreError::Internal(e.to_string()))??;

        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema().await?;

        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "CREATE TABLE IF NOT EXISTS categories (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    description TEXT
                )",
                [],
            )?;

            conn.execute(
                "CREATE TABLE IF NOT EXISTS users (
                    id TEXT PRIMARY KEY,
                    username TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            // seq preserves insertion order, the tiebreaker for listings
            conn.execute(
                "CREATE TABLE IF NOT EXISTS tickets (
                    seq INTEGER PRIMARY KEY AUTOINCREMENT,
                    id TEXT NOT NULL UNIQUE,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL,
                    summary TEXT,
                    category_id TEXT NOT NULL REFERENCES categories(id),
                    user_id TEXT NOT NULL REFERENCES users(id),
                    created_at DATETIME NOT NULL,
                    updated_at DATETIME NOT NULL
                )",
                [],
            )?;

            conn.execute(
                "CREATE INDEX IF NOT EXISTS idx_tickets_created
                 ON tickets(created_at)",
                [],
            )?;
            conn.execute(
                "CREATE INDEX IF NOT EXISTS idx_tickets_category
                 ON tickets(category_id)",
                [],
            )?;

            Ok(())
        })
        .await
    }

    /// Run a closure against the connection on the blocking pool
    pub(crate) async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.blocking_lock();
            f(&mut conn)
        })
        .await
        .map_err(|e| StoreError::Internal(e.to_string()))?
    }
}

#[async_trait]
impl TicketStore for SqliteStore {
    async fn list_tickets(&self, filter: TicketFilter, page: PageRequest) -> Result<TicketPage> {
        self.with_conn(move |conn| queries::list_tickets(conn, &filter, &page)).await
    }

    async fn get_ticket(&self, ticket_id: &str) -> Result<TicketWithRelations> {
        let ticket_id = ticket_id.to_string();
        self.with_conn(move |conn| queries::get_ticket(conn, &ticket_id)).await
    }

    async fn create_ticket(&self, new_ticket: NewTicket) -> Result<TicketWithRelations> {
        self.with_conn(move |conn| commands::create_ticket(conn, new_ticket)).await
    }

    async fn update_ticket(&self, ticket_id: &str, patch: TicketPatch) -> Result<TicketWithRelations> {
        let ticket_id = ticket_id.to_string();
        self.with_conn(move |conn| commands::update_ticket(conn, &ticket_id, patch)).await
    }

    async fn delete_ticket(&self, ticket_id: &str) -> Result<()> {
        let ticket_id = ticket_id.to_string();
        self.with_conn(move |conn| commands::delete_ticket(conn, &ticket_id)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.with_conn(|conn| queries::list_categories(conn)).await
    }
}
