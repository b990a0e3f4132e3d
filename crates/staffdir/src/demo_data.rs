use staffdir_core::person::Person;

use crate::storage::InMemoryStore;

/// Generates demo directory entries for demonstration purposes.
pub fn demo_persons() -> Vec<Person> {
    vec![
        Person::new("amara", 1),
        Person::new("bruno", 2),
        Person::new("chen", 1),
        Person::new("dara", 3),
        Person::new("emil", 2),
    ]
}

/// Seeds the store with the demo directory so the endpoint is exercisable
/// out of the box.
pub async fn seed(store: &InMemoryStore) {
    for person in demo_persons() {
        store.insert_person(person).await;
    }
    tracing::debug!(count = demo_persons().len(), "Seeded demo directory");
}
