mod representation;
mod types;

pub use representation::{person_repr, PersonRepr};
pub use types::Person;
