//! Use case for fetching a single person by reference.

use std::sync::Arc;

use crate::person::Person;
use crate::storage::{PersonStore, Result};

/// Parameters for [`GetPerson::execute`].
///
/// Parameters travel as an immutable value per call, so a single interactor
/// instance can be shared across requests without carrying state between
/// executions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPersonParams {
    pub reference: String,
}

impl GetPersonParams {
    /// Creates parameters for the given reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// Application command that resolves a person through the configured store.
pub struct GetPerson {
    store: Arc<dyn PersonStore>,
}

impl GetPerson {
    /// Creates the interactor over the given store.
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Performs exactly one store lookup for the given parameters.
    ///
    /// The reference is not validated here; the store decides what exists.
    pub async fn execute(&self, params: GetPersonParams) -> Result<Person> {
        self.store.get_person(&params.reference).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::storage::RepositoryError;

    struct SinglePersonStore {
        person: Person,
        lookups: AtomicUsize,
    }

    impl SinglePersonStore {
        fn new(person: Person) -> Self {
            Self {
                person,
                lookups: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PersonStore for SinglePersonStore {
        async fn get_person(&self, reference: &str) -> Result<Person> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if reference == self.person.reference() {
                Ok(self.person.clone())
            } else {
                Err(RepositoryError::person_not_found(reference))
            }
        }
    }

    #[tokio::test]
    async fn test_execute_resolves_person() {
        let store = Arc::new(SinglePersonStore::new(Person::new("abc", 5)));
        let interactor = GetPerson::new(store.clone());

        let person = interactor
            .execute(GetPersonParams::new("abc"))
            .await
            .unwrap();

        assert_eq!(person.reference(), "abc");
        assert_eq!(person.department_id(), 5);
        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_execute_performs_one_lookup_per_call() {
        let store = Arc::new(SinglePersonStore::new(Person::new("abc", 5)));
        let interactor = GetPerson::new(store.clone());

        let _ = interactor.execute(GetPersonParams::new("abc")).await;
        let _ = interactor.execute(GetPersonParams::new("other")).await;

        assert_eq!(store.lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_execute_propagates_not_found() {
        let store = Arc::new(SinglePersonStore::new(Person::new("abc", 5)));
        let interactor = GetPerson::new(store);

        let result = interactor.execute(GetPersonParams::new("missing")).await;

        assert_eq!(
            result,
            Err(RepositoryError::person_not_found("missing"))
        );
    }
}
