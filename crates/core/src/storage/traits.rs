use async_trait::async_trait;

use crate::person::Person;

use super::Result;

/// Abstract record store for person lookups.
///
/// Backing adapters (authoritative database, cache-aside decorator) all
/// implement this trait. Absence of a record is reported as
/// [`RepositoryError::NotFound`](super::RepositoryError::NotFound), never as
/// an empty person.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Gets a person by their reference.
    async fn get_person(&self, reference: &str) -> Result<Person>;
}
