use crate::model::{Contact, ContactId};
use crate::store::ContactStore;

/// Look a contact up by id. Absence is a normal outcome, not an error.
pub fn run<S: ContactStore>(store: &S, id: ContactId) -> Option<Contact> {
    let found = store.get(id);
    if found.is_none() {
        tracing::debug!(id, "no contact with this id");
    }
    found
}
