//! SQLite-backed sink. Persistent across process restarts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::params;
use tracing::debug;

use super::{ContentRecord, ContentSink, SinkError};

fn storage(e: impl std::fmt::Display) -> SinkError {
    SinkError::Storage(e.to_string())
}

/// One row per accepted idea in `content_records`.
///
/// Opens a fresh connection per call inside `spawn_blocking`.
///
/// **Interaction**: Used as `Arc<dyn ContentSink>` by the CLI after a successful expansion.
pub struct SqliteSink {
    db_path: PathBuf,
}

impl SqliteSink {
    /// Opens (or creates) the database file and ensures the table exists.
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let db_path = path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(storage)?;
        }
        let conn = rusqlite::Connection::open(&db_path).map_err(storage)?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS content_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                business_name TEXT NOT NULL,
                description TEXT NOT NULL,
                tone TEXT NOT NULL,
                goals TEXT NOT NULL,
                idea TEXT NOT NULL,
                final_content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
            [],
        )
        .map_err(storage)?;
        Ok(Self { db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    pub async fn count(&self) -> Result<usize, SinkError> {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let conn = rusqlite::Connection::open(&db_path).map_err(storage)?;
            let n: i64 = conn
                .query_row("SELECT COUNT(*) FROM content_records", [], |row| row.get(0))
                .map_err(storage)?;
            Ok::<usize, SinkError>(n as usize)
        })
        .await
        .map_err(storage)?
    }

    /// Most recent records first, at most `limit`.
    pub async fn recent(&self, limit: usize) -> Result<Vec<ContentRecord>, SinkError> {
        let db_path = self.db_path.clone();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        tokio::task::spawn_blocking(move || {
            let conn = rusqlite::Connection::open(&db_path).map_err(storage)?;
            let mut stmt = conn
                .prepare(
                    "SELECT business_name, description, tone, goals, idea, final_content, created_at
                     FROM content_records ORDER BY id DESC LIMIT ?1",
                )
                .map_err(storage)?;
            let rows = stmt
                .query_map(params![limit], |row| {
                    Ok(ContentRecord {
                        business_name: row.get(0)?,
                        description: row.get(1)?,
                        tone: row.get(2)?,
                        goals: row.get(3)?,
                        idea: row.get(4)?,
                        final_content: row.get(5)?,
                        created_at: row.get(6)?,
                    })
                })
                .map_err(storage)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(storage)
        })
        .await
        .map_err(storage)?
    }
}

#[async_trait]
impl ContentSink for SqliteSink {
    async fn append(&self, record: &ContentRecord) -> Result<(), SinkError> {
        let record = record.clone();
        let db_path = self.db_path.clone();

        tokio::task::spawn_blocking(move || {
            let conn = rusqlite::Connection::open(&db_path).map_err(storage)?;
            conn.execute(
                "INSERT INTO content_records
                 (business_name, description, tone, goals, idea, final_content, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.business_name,
                    record.description,
                    record.tone,
                    record.goals,
                    record.idea,
                    record.final_content,
                    record.created_at
                ],
            )
            .map_err(storage)?;
            Ok::<(), SinkError>(())
        })
        .await
        .map_err(storage)??;

        debug!(path = %self.db_path.display(), "content record appended");
        Ok(())
    }
}
