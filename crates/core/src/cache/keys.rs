/// Returns the cache key for a person.
pub fn person_key(reference: &str) -> String {
    format!("person:{reference}")
}
