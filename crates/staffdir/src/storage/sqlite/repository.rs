//! SQLite store implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use staffdir_core::person::Person;
use staffdir_core::storage::{PersonStore, RepositoryError, Result};

use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Decodes a persons row into the domain entity.
fn row_to_person(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
    let reference: String = row.get(0)?;
    let department_id: i64 = row.get(1)?;
    Ok(Person::new(reference, department_id))
}

/// SQLite-backed authoritative person store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Inserts or replaces a person row.
    ///
    /// Not part of the store trait; used for seeding and tests.
    pub async fn upsert_person(&self, person: &Person) -> Result<()> {
        let reference = person.reference().to_string();
        let department_id = person.department_id();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_PERSON,
                    rusqlite::params![reference, department_id],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl PersonStore for SqliteStore {
    async fn get_person(&self, reference: &str) -> Result<Person> {
        let reference_owned = reference.to_string();

        let person = self
            .conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PERSON_BY_REFERENCE)
                    .map_err(wrap_err)?;
                match stmt.query_row([&reference_owned], row_to_person) {
                    Ok(person) => Ok(Some(person)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        person.ok_or_else(|| RepositoryError::person_not_found(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_and_get_round_trip() {
        let store = SqliteStore::new_in_memory().await.unwrap();
        store.upsert_person(&Person::new("abc", 5)).await.unwrap();

        let person = store.get_person("abc").await.unwrap();

        assert_eq!(person.reference(), "abc");
        assert_eq!(person.department_id(), 5);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = SqliteStore::new_in_memory().await.unwrap();

        let result = store.get_person("nobody").await;

        assert_eq!(result, Err(RepositoryError::person_not_found("nobody")));
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing() {
        let store = SqliteStore::new_in_memory().await.unwrap();
        store.upsert_person(&Person::new("abc", 5)).await.unwrap();
        store.upsert_person(&Person::new("abc", 9)).await.unwrap();

        let person = store.get_person("abc").await.unwrap();

        assert_eq!(person.department_id(), 9);
    }
}
