//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Persons table
CREATE TABLE IF NOT EXISTS persons (
    reference TEXT PRIMARY KEY,
    department_id INTEGER NOT NULL
);
"#;

pub const SELECT_PERSON_BY_REFERENCE: &str = r#"
SELECT reference, department_id
FROM persons
WHERE reference = ?1
"#;

pub const UPSERT_PERSON: &str = r#"
INSERT OR REPLACE INTO persons (reference, department_id)
VALUES (?1, ?2)
"#;
