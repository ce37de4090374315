//! SQLite-backed history store.

use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info, warn};

use lexdraft_core::{DataMap, DocumentType, Error, Language, Result};

use crate::schema::SCHEMA_SQL;
use crate::types::{HistoryEntry, SavedDocument};

/// SQLite store for user history and archived documents.
pub struct HistoryStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl HistoryStore {
    /// Open or create the store.
    ///
    /// `db_dir` is the directory (e.g., `data/history/`). The file will be
    /// `db_dir/history.db`.
    pub fn open(db_dir: impl AsRef<Path>) -> Result<Self> {
        let db_dir = db_dir.as_ref();
        std::fs::create_dir_all(db_dir).map_err(|e| Error::Storage(e.to_string()))?;
        let db_path = db_dir.join("history.db");

        let conn = Connection::open(&db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };
        info!("HistoryStore initialized: path={}", store.db_path.display());
        Ok(store)
    }

    /// Record a user action, best-effort.
    ///
    /// A missing user or a store error is logged and swallowed — history
    /// must never block document generation.
    pub fn record_action(&self, user_id: Option<&str>, action: &str, details: &str) {
        let Some(user_id) = user_id else {
            debug!("no authenticated user; skipping history for action {action}");
            return;
        };

        let conn = self.conn.lock();
        let result = conn
            .prepare_cached(
                "INSERT INTO user_history (user_id, action, details, created_at) VALUES (?1, ?2, ?3, ?4)",
            )
            .and_then(|mut stmt| {
                stmt.execute(params![user_id, action, details, Utc::now().timestamp_millis()])
            });
        if let Err(e) = result {
            warn!("failed to record action {action} for user {user_id}: {e}");
        }
    }

    /// Archive a generated document alongside the data it was rendered
    /// from. Returns the new row id, or `None` when there is no user or
    /// the write failed (logged, not raised).
    pub fn save_document(
        &self,
        user_id: Option<&str>,
        doc_type: DocumentType,
        language: Language,
        title: &str,
        content: &str,
        source_data: &DataMap,
    ) -> Option<i64> {
        let user_id = match user_id {
            Some(id) => id,
            None => {
                debug!("no authenticated user; not saving {doc_type} document");
                return None;
            }
        };

        let source_json = match serde_json::to_string(source_data) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize source data for {doc_type}: {e}");
                return None;
            }
        };

        let conn = self.conn.lock();
        let result = conn
            .prepare_cached(
                "INSERT INTO generated_documents
                 (user_id, document_type, language, title, content, source_data_json, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )
            .and_then(|mut stmt| {
                stmt.insert(params![
                    user_id,
                    doc_type.as_str(),
                    language.code(),
                    title,
                    content,
                    source_json,
                    Utc::now().timestamp_millis(),
                ])
            });

        match result {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("failed to save {doc_type} document for user {user_id}: {e}");
                None
            }
        }
    }

    /// All history entries for a user, newest first.
    pub fn history_for_user(&self, user_id: &str) -> Result<Vec<HistoryEntry>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, user_id, action, details, created_at
                 FROM user_history WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![user_id], Self::row_to_history)
            .map_err(|e| Error::Database(e.to_string()))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows)
    }

    /// All archived documents for a user, newest first.
    pub fn documents_for_user(&self, user_id: &str) -> Result<Vec<SavedDocument>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, user_id, document_type, language, title, content, source_data_json, created_at
                 FROM generated_documents WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![user_id], Self::row_to_document)
            .map_err(|e| Error::Database(e.to_string()))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows)
    }

    /// Fetch one archived document, scoped to its owner.
    pub fn get_document(&self, doc_id: i64, user_id: &str) -> Result<Option<SavedDocument>> {
        let conn = self.conn.lock();
        let row = conn
            .prepare_cached(
                "SELECT id, user_id, document_type, language, title, content, source_data_json, created_at
                 FROM generated_documents WHERE id = ?1 AND user_id = ?2",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![doc_id, user_id], Self::row_to_document)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row)
    }

    fn row_to_history(row: &Row<'_>) -> rusqlite::Result<HistoryEntry> {
        Ok(HistoryEntry {
            id: row.get(0)?,
            user_id: row.get(1)?,
            action: row.get(2)?,
            details: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn row_to_document(row: &Row<'_>) -> rusqlite::Result<SavedDocument> {
        let doc_type_str: String = row.get(2)?;
        let doc_type = doc_type_str.parse::<DocumentType>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                format!("unknown document type {doc_type_str}").into(),
            )
        })?;

        let language_code: String = row.get(3)?;
        let language = Language::from_code(&language_code).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                format!("unknown language {language_code}").into(),
            )
        })?;

        let source_json: Option<String> = row.get(6)?;
        let source_data = source_json
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or(serde_json::Value::Null);

        Ok(SavedDocument {
            id: row.get(0)?,
            user_id: row.get(1)?,
            document_type: doc_type,
            language,
            title: row.get(4)?,
            content: row.get(5)?,
            source_data,
            created_at: row.get(7)?,
        })
    }
}
