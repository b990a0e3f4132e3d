//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use staffdir_core::person::Person;
use staffdir_core::storage::{PersonStore, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    persons: Arc<RwLock<HashMap<String, Person>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a person, replacing any previous entry for the reference.
    ///
    /// Not part of the store trait; used for seeding and tests.
    pub async fn insert_person(&self, person: Person) {
        self.persons
            .write()
            .await
            .insert(person.reference().to_string(), person);
    }
}

#[async_trait]
impl PersonStore for InMemoryStore {
    async fn get_person(&self, reference: &str) -> Result<Person> {
        let persons = self.persons.read().await;
        persons
            .get(reference)
            .cloned()
            .ok_or_else(|| RepositoryError::person_not_found(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryStore::new();
        store.insert_person(Person::new("abc", 5)).await;

        let person = store.get_person("abc").await.unwrap();

        assert_eq!(person.reference(), "abc");
        assert_eq!(person.department_id(), 5);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = InMemoryStore::new();

        let result = store.get_person("nobody").await;

        assert_eq!(result, Err(RepositoryError::person_not_found("nobody")));
    }

    #[tokio::test]
    async fn test_insert_replaces_existing() {
        let store = InMemoryStore::new();
        store.insert_person(Person::new("abc", 5)).await;
        store.insert_person(Person::new("abc", 9)).await;

        let person = store.get_person("abc").await.unwrap();

        assert_eq!(person.department_id(), 9);
    }
}
