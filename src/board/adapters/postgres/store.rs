//! `PostgreSQL` task store implementation.

use super::{
    models::{NewTaskDocumentRow, TaskDocumentRow},
    schema::board_tasks,
};
use crate::board::ports::{
    StoredTaskDocument, TaskDocument, TaskStore, TaskStoreError, TaskStoreResult,
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by the board adapter.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::unavailable)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn list_all(&self) -> TaskStoreResult<Vec<StoredTaskDocument>> {
        self.run_blocking(|connection| {
            let rows = board_tasks::table
                .order(board_tasks::seq.asc())
                .select(TaskDocumentRow::as_select())
                .load::<TaskDocumentRow>(connection)
                .map_err(TaskStoreError::unavailable)?;
            Ok(rows.into_iter().map(row_to_stored).collect())
        })
        .await
    }

    async fn create(&self, document: &TaskDocument) -> TaskStoreResult<String> {
        let new_row = to_new_row(document, Uuid::new_v4());
        let key = new_row.id.to_string();
        self.run_blocking(move |connection| {
            diesel::insert_into(board_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(TaskStoreError::unavailable)?;
            Ok(())
        })
        .await?;
        Ok(key)
    }

    async fn update_status(&self, key: &str, status: &str) -> TaskStoreResult<()> {
        let id = parse_key(key)?;
        let owned_key = key.to_owned();
        let owned_status = status.to_owned();
        self.run_blocking(move |connection| {
            let updated = diesel::update(board_tasks::table.find(id))
                .set(board_tasks::status.eq(owned_status))
                .execute(connection)
                .map_err(TaskStoreError::unavailable)?;
            ensure_affected(updated, owned_key)
        })
        .await
    }

    async fn delete(&self, key: &str) -> TaskStoreResult<()> {
        let id = parse_key(key)?;
        let owned_key = key.to_owned();
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(board_tasks::table.find(id))
                .execute(connection)
                .map_err(TaskStoreError::unavailable)?;
            ensure_affected(deleted, owned_key)
        })
        .await
    }
}

/// Keys this adapter never issued cannot name a stored row.
fn parse_key(key: &str) -> TaskStoreResult<Uuid> {
    Uuid::parse_str(key).map_err(|_| TaskStoreError::NotFound(key.to_owned()))
}

fn ensure_affected(rows: usize, key: String) -> TaskStoreResult<()> {
    if rows == 0 {
        return Err(TaskStoreError::NotFound(key));
    }
    Ok(())
}

fn to_new_row(document: &TaskDocument, id: Uuid) -> NewTaskDocumentRow {
    NewTaskDocumentRow {
        id,
        text: document.text.clone(),
        status: document.status.clone(),
    }
}

fn row_to_stored(row: TaskDocumentRow) -> StoredTaskDocument {
    let TaskDocumentRow { id, text, status } = row;
    StoredTaskDocument {
        key: id.to_string(),
        document: TaskDocument { text, status },
    }
}
