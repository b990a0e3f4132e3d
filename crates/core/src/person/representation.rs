//! Pure mapping from the person entity to its wire representation.

use serde::{Deserialize, Serialize};

use super::Person;

/// Wire-facing shape of a person.
///
/// Serializes as `{"reference": ..., "departmentId": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRepr {
    pub reference: String,
    #[serde(rename = "departmentId")]
    pub department_id: i64,
}

/// Maps a person to its wire representation.
///
/// No validation and no omitted fields; field order is irrelevant.
pub fn person_repr(person: &Person) -> PersonRepr {
    PersonRepr {
        reference: person.reference().to_string(),
        department_id: person.department_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_both_fields() {
        let person = Person::new("abc", 5);
        let repr = person_repr(&person);

        assert_eq!(repr.reference, "abc");
        assert_eq!(repr.department_id, 5);
    }

    #[test]
    fn test_serializes_with_camel_case_department_id() {
        let repr = person_repr(&Person::new("abc", 5));
        let json = serde_json::to_value(&repr).unwrap();

        assert_eq!(json, serde_json::json!({"reference": "abc", "departmentId": 5}));
    }

    #[test]
    fn test_no_fields_dropped_for_zero_department() {
        let repr = person_repr(&Person::new("x", 0));
        let json = serde_json::to_value(&repr).unwrap();

        assert_eq!(json["departmentId"], 0);
    }
}
