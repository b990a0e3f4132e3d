use serde::{Deserialize, Serialize};

/// A member of staff, identified by an opaque reference.
///
/// Both fields are fixed at construction; there are no setters. A lookup
/// that finds nothing is reported through the store's error type, never as
/// an empty person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    reference: String,
    department_id: i64,
}

impl Person {
    /// Creates a new person with the given reference and department.
    pub fn new(reference: impl Into<String>, department_id: i64) -> Self {
        Self {
            reference: reference.into(),
            department_id,
        }
    }

    /// The opaque identifier this person is looked up by.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The identifier of the department this person belongs to.
    pub fn department_id(&self) -> i64 {
        self.department_id
    }
}
