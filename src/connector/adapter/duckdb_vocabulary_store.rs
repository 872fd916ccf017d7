use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, AccessMode, Config, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::VocabularyStore;
use crate::domain::{DomainError, VocabularyTerm};

/// LCSH vocabulary kept in DuckDB, keyed by term id.
pub struct DuckdbVocabularyStore {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbVocabularyStore {
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path).map_err(|e| {
            DomainError::store_unavailable(format!(
                "Failed to open LCSH database {}: {}",
                db_path.display(),
                e
            ))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_read_only(db_path: &Path) -> Result<Self, DomainError> {
        let config = Config::default()
            .access_mode(AccessMode::ReadOnly)
            .map_err(|e| DomainError::store_unavailable(format!("Invalid DuckDB config: {}", e)))?;
        let conn = Connection::open_with_flags(db_path, config).map_err(|e| {
            DomainError::store_unavailable(format!(
                "Failed to open LCSH database {} read-only: {}",
                db_path.display(),
                e
            ))
        })?;
        debug!("Opened LCSH database {} read-only", db_path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn in_memory() -> Result<Self, DomainError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            DomainError::store_unavailable(format!("Failed to open DuckDB in-memory DB: {}", e))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS terms (
                id TEXT PRIMARY KEY,
                label TEXT NOT NULL,
                alt_labels TEXT,
                broader TEXT,
                narrower TEXT
            );
            "#,
        )
        .map_err(|e| DomainError::store_unavailable(format!("Failed to initialize schema: {}", e)))?;

        debug!("DuckDB LCSH schema initialized");
        Ok(())
    }

    pub async fn save(&self, term: &VocabularyTerm) -> Result<(), DomainError> {
        let conn = self.conn.lock().await;

        conn.execute(
            r#"
            INSERT INTO terms (id, label, alt_labels, broader, narrower)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (id) DO UPDATE SET
                label = excluded.label,
                alt_labels = excluded.alt_labels,
                broader = excluded.broader,
                narrower = excluded.narrower
            "#,
            params![
                term.id(),
                term.label(),
                serialize_list(term.alt_labels()),
                serialize_list(term.broader()),
                serialize_list(term.narrower()),
            ],
        )
        .map_err(|e| DomainError::store_unavailable(format!("Failed to save LCSH term: {}", e)))?;

        Ok(())
    }
}

fn serialize_list(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        serde_json::to_string(values).ok()
    }
}

fn deserialize_list(term_id: &str, json: Option<String>) -> Result<Vec<String>, DomainError> {
    match json {
        None => Ok(Vec::new()),
        Some(s) => serde_json::from_str(&s).map_err(|e| {
            DomainError::internal(format!("Malformed list column for term {}: {}", term_id, e))
        }),
    }
}

#[async_trait]
impl VocabularyStore for DuckdbVocabularyStore {
    async fn find_label(&self, term_id: &str) -> Result<Option<String>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT label FROM terms WHERE id = ?1")
            .map_err(|e| DomainError::store_unavailable(format!("Failed to prepare statement: {}", e)))?;

        match stmt.query_row(params![term_id], |row| row.get::<_, String>(0)) {
            Ok(label) => Ok(Some(label)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DomainError::store_unavailable(format!(
                "Failed to query LCSH term: {}",
                e
            ))),
        }
    }

    async fn find_term(&self, term_id: &str) -> Result<Option<VocabularyTerm>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT id, label, alt_labels, broader, narrower FROM terms WHERE id = ?1")
            .map_err(|e| DomainError::store_unavailable(format!("Failed to prepare statement: {}", e)))?;

        let row = stmt.query_row(params![term_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        });

        match row {
            Ok((id, label, alt_labels, broader, narrower)) => {
                let term = VocabularyTerm::new(id, label)
                    .with_alt_labels(deserialize_list(term_id, alt_labels)?)
                    .with_broader(deserialize_list(term_id, broader)?)
                    .with_narrower(deserialize_list(term_id, narrower)?);
                Ok(Some(term))
            }
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DomainError::store_unavailable(format!(
                "Failed to query LCSH term: {}",
                e
            ))),
        }
    }
}
