mod get_person;

pub use get_person::{GetPerson, GetPersonParams};
