//! Pure functions for serializing/deserializing the person entity to/from
//! cache bytes.
//!
//! JSON is used for cache storage, keeping cache values human-readable and
//! easy to inspect while debugging.

use thiserror::Error;

use crate::person::Person;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Serializes a person to JSON bytes.
pub fn serialize_person(person: &Person) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(person).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a person.
pub fn deserialize_person(bytes: &[u8]) -> Result<Person, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_round_trip() {
        let person = Person::new("abc-123", 42);
        let bytes = serialize_person(&person).unwrap();
        let decoded = deserialize_person(&bytes).unwrap();

        assert_eq!(decoded, person);
    }

    #[test]
    fn test_deserialize_garbage_fails() {
        let result = deserialize_person(b"not json at all");
        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }
}
