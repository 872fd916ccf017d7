use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::{params, AccessMode, Config, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::RepositoryStore;
use crate::domain::{AnnotatedRepository, DomainError};

const SELECT_ANNOTATED: &str = r#"
    SELECT r.id, r.owner, r.name, t.term
    FROM repos r
    JOIN repo_terms t ON t.repo_id = r.id
    ORDER BY r.id, t.position
"#;

const SELECT_BY_TERM: &str = r#"
    SELECT r.id, r.owner, r.name, t.term
    FROM repos r
    JOIN repo_terms t ON t.repo_id = r.id
    WHERE r.id IN (SELECT repo_id FROM repo_terms WHERE term = ?1)
    ORDER BY r.id, t.position
"#;

/// Repository catalog kept in DuckDB.
///
/// A repository's `topics.lcsh` list is stored as rows of `repo_terms`,
/// ordered by `position`. Repositories without any row there are not
/// annotated.
pub struct DuckdbRepositoryStore {
    conn: Arc<Mutex<Connection>>,
}

impl DuckdbRepositoryStore {
    /// Opens (and if needed creates) a writable catalog.
    pub fn new(db_path: &Path) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path).map_err(|e| {
            DomainError::store_unavailable(format!(
                "Failed to open repository database {}: {}",
                db_path.display(),
                e
            ))
        })?;
        Self::initialize_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens an existing catalog without taking DuckDB's write lock.
    pub fn open_read_only(db_path: &Path) -> Result<Self, DomainError> {
        let config = Config::default()
            .access_mode(AccessMode::ReadOnly)
            .map_err(|e| DomainError::store_unavailable(format!("Invalid DuckDB config: {}", e)))?;
        let conn = Connection::open_with_flags(db_path, config).map_err(|e| {
            DomainError::store_unavailable(format!(
                "Failed to open repository database {} read-only: {}",
                db_path.display(),
                e
            ))
        })?;
        debug!("Opened repository database {} read-only", db_path.display());

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
            CREATE TABLE IF NOT EXISTS repos (
                id BIGINT PRIMARY KEY,
                owner TEXT NOT NULL,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS repo_terms (
                repo_id BIGINT NOT NULL,
                position INTEGER NOT NULL,
                term TEXT NOT NULL,
                PRIMARY KEY (repo_id, position)
            );
            "#,
        )
        .map_err(|e| DomainError::store_unavailable(format!("Failed to initialize schema: {}", e)))?;

        debug!("DuckDB repository schema initialized");
        Ok(())
    }

    /// Replaces the stored copy of `repository`, including its term list.
    pub async fn save(&self, repository: &AnnotatedRepository) -> Result<(), DomainError> {
        let conn = self.conn.lock().await;

        conn.execute(
            r#"
            INSERT INTO repos (id, owner, name) VALUES (?1, ?2, ?3)
            ON CONFLICT (id) DO UPDATE SET
                owner = excluded.owner,
                name = excluded.name
            "#,
            params![repository.id(), repository.owner(), repository.name()],
        )
        .map_err(|e| DomainError::store_unavailable(format!("Failed to save repository: {}", e)))?;

        conn.execute(
            "DELETE FROM repo_terms WHERE repo_id = ?1",
            params![repository.id()],
        )
        .map_err(|e| DomainError::store_unavailable(format!("Failed to clear terms: {}", e)))?;

        for (position, term) in repository.terms().iter().enumerate() {
            conn.execute(
                "INSERT INTO repo_terms (repo_id, position, term) VALUES (?1, ?2, ?3)",
                params![repository.id(), position as i32, term],
            )
            .map_err(|e| DomainError::store_unavailable(format!("Failed to save term: {}", e)))?;
        }

        Ok(())
    }

    async fn query_grouped(
        &self,
        sql: &str,
        term_id: Option<&str>,
    ) -> Result<Vec<AnnotatedRepository>, DomainError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| DomainError::store_unavailable(format!("Failed to prepare statement: {}", e)))?;

        let map_row = |row: &duckdb::Row<'_>| -> duckdb::Result<(i64, String, String, String)> {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        };
        let rows = match term_id {
            Some(term_id) => stmt.query_map(params![term_id], map_row),
            None => stmt.query_map([], map_row),
        }
        .map_err(|e| DomainError::store_unavailable(format!("Failed to query repositories: {}", e)))?;

        let mut repos: Vec<AnnotatedRepository> = Vec::new();
        let mut current: Option<(i64, String, String, Vec<String>)> = None;
        for row in rows {
            let (id, owner, name, term) =
                row.map_err(|e| DomainError::store_unavailable(format!("Failed to read row: {}", e)))?;
            match current.as_mut() {
                Some((current_id, _, _, terms)) if *current_id == id => terms.push(term),
                _ => {
                    if let Some((id, owner, name, terms)) = current.take() {
                        repos.push(AnnotatedRepository::reconstitute(id, owner, name, terms));
                    }
                    current = Some((id, owner, name, vec![term]));
                }
            }
        }
        if let Some((id, owner, name, terms)) = current {
            repos.push(AnnotatedRepository::reconstitute(id, owner, name, terms));
        }

        Ok(repos)
    }
}

#[async_trait]
impl RepositoryStore for DuckdbRepositoryStore {
    async fn fetch_annotated(&self) -> Result<Vec<AnnotatedRepository>, DomainError> {
        let repos = self.query_grouped(SELECT_ANNOTATED, None).await?;
        debug!("Fetched {} annotated repositories from DuckDB", repos.len());
        Ok(repos)
    }

    async fn fetch_by_term(&self, term_id: &str) -> Result<Vec<AnnotatedRepository>, DomainError> {
        let repos = self.query_grouped(SELECT_BY_TERM, Some(term_id)).await?;
        debug!("Fetched {} repositories annotated with {}", repos.len(), term_id);
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> DuckdbRepositoryStore {
        let store = DuckdbRepositoryStore::in_memory().expect("in-memory duckdb");
        store
            .save(&AnnotatedRepository::new(3, "carol", "c").with_terms(["sh2", "sh1"]))
            .await
            .expect("save 3");
        store
            .save(&AnnotatedRepository::new(1, "alice", "a").with_terms(["sh1"]))
            .await
            .expect("save 1");
        store
            .save(&AnnotatedRepository::new(2, "bob", "b"))
            .await
            .expect("save 2");
        store
    }

    #[tokio::test]
    async fn test_fetch_annotated_skips_unannotated_and_keeps_term_order() {
        let repos = seeded().await.fetch_annotated().await.expect("fetch");

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].id(), 1);
        assert_eq!(repos[1].id(), 3);
        assert_eq!(repos[1].terms(), &["sh2".to_string(), "sh1".to_string()]);
        assert_eq!(repos[1].owner(), "carol");
    }

    #[tokio::test]
    async fn test_fetch_by_term_returns_full_term_lists() {
        let repos = seeded().await.fetch_by_term("sh2").await.expect("fetch");

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].id(), 3);
        assert_eq!(repos[0].term_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_by_absent_term_is_empty() {
        let repos = seeded().await.fetch_by_term("sh123").await.expect("fetch");
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_terms() {
        let store = seeded().await;
        store
            .save(&AnnotatedRepository::new(3, "carol", "c").with_terms(["sh9"]))
            .await
            .expect("resave");

        let repos = store.fetch_by_term("sh9").await.expect("fetch");
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].terms(), &["sh9".to_string()]);
        assert!(store.fetch_by_term("sh2").await.expect("fetch").is_empty());
    }
}
