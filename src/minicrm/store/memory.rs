use super::ContactStore;
use crate::error::{CrmError, Result};
use crate::model::{Contact, ContactId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: HashMap<ContactId, Contact>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already validated contacts. Later duplicates win.
    pub fn from_contacts<I: IntoIterator<Item = Contact>>(contacts: I) -> Self {
        Self {
            contacts: contacts.into_iter().map(|c| (c.id(), c)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Swap in `contact` and hand back what it replaced.
    pub(crate) fn replace(&mut self, contact: &Contact) -> Result<Contact> {
        match self.contacts.get_mut(&contact.id()) {
            Some(slot) => Ok(std::mem::replace(slot, contact.clone())),
            None => Err(CrmError::NotFound(contact.id())),
        }
    }

    pub(crate) fn take(&mut self, id: ContactId) -> Result<Contact> {
        self.contacts.remove(&id).ok_or(CrmError::NotFound(id))
    }

    /// Put a contact back unconditionally. Only used to undo a mutation.
    pub(crate) fn restore(&mut self, contact: Contact) {
        self.contacts.insert(contact.id(), contact);
    }

    pub(crate) fn sorted(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.contacts.values().collect();
        contacts.sort_by_key(|c| c.id());
        contacts
    }
}

impl ContactStore for InMemoryStore {
    fn add(&mut self, contact: Contact) -> Result<()> {
        match self.contacts.entry(contact.id()) {
            Entry::Occupied(_) => Err(CrmError::DuplicateId(contact.id())),
            Entry::Vacant(slot) => {
                slot.insert(contact);
                Ok(())
            }
        }
    }

    fn get(&self, id: ContactId) -> Option<Contact> {
        self.contacts.get(&id).cloned()
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.values().cloned().collect()
    }

    fn update(&mut self, contact: &Contact) -> Result<()> {
        self.replace(contact).map(|_| ())
    }

    fn remove(&mut self, id: ContactId) -> Result<()> {
        self.take(id).map(|_| ())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed contacts with ids `1..=count`.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 1..=count {
                let contact = Contact::new(
                    i as ContactId,
                    &format!("Contact {}", i),
                    &format!("contact{}@example.com", i),
                )
                .unwrap();
                self.store.add(contact).unwrap();
            }
            self
        }

        pub fn with_contact(mut self, id: ContactId, name: &str, email: &str) -> Self {
            let contact = Contact::new(id, name, email).unwrap();
            self.store.add(contact).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    fn contact(id: ContactId, name: &str, email: &str) -> Contact {
        Contact::new(id, name, email).unwrap()
    }

    fn sorted_ids(store: &InMemoryStore) -> Vec<ContactId> {
        let mut ids: Vec<_> = store.list().iter().map(Contact::id).collect();
        ids.sort();
        ids
    }

    #[test]
    fn add_then_get_returns_exact_values() {
        let mut store = InMemoryStore::new();
        store.add(contact(1, "Ada Lovelace", "ada@x.org")).unwrap();

        let got = store.get(1).unwrap();
        assert_eq!(got.name(), "Ada Lovelace");
        assert_eq!(got.email(), "ada@x.org");
    }

    #[test]
    fn duplicate_add_fails_and_keeps_original() {
        let mut store = InMemoryStore::new();
        store.add(contact(1, "A", "a@x.com")).unwrap();

        let err = store.add(contact(1, "B", "b@x.com")).unwrap_err();
        assert!(matches!(err, CrmError::DuplicateId(1)));

        let got = store.get(1).unwrap();
        assert_eq!((got.name(), got.email()), ("A", "a@x.com"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_miss_is_none() {
        let store = StoreFixture::new().with_contacts(2).store;
        assert!(store.get(42).is_none());
    }

    #[test]
    fn list_is_a_snapshot() {
        let mut store = StoreFixture::new().with_contacts(3).store;
        let first = store.list();
        assert_eq!(sorted_ids(&store), vec![1, 2, 3]);

        store.remove(2).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(sorted_ids(&store), vec![1, 3]);
    }

    #[test]
    fn list_twice_without_mutation_is_stable() {
        let store = StoreFixture::new().with_contacts(5).store;
        let mut a = store.list();
        let mut b = store.list();
        a.sort_by_key(Contact::id);
        b.sort_by_key(Contact::id);
        assert_eq!(a, b);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = store.update(&contact(5, "New Name", "n@x.com")).unwrap_err();
        assert!(matches!(err, CrmError::NotFound(5)));
        assert!(store.is_empty());
    }

    #[test]
    fn update_replaces_fields() {
        let mut store = StoreFixture::new().with_contact(1, "Ada", "ada@x.org").store;
        let mut c = store.get(1).unwrap();
        c.update("Ada King", "");
        store.update(&c).unwrap();

        let got = store.get(1).unwrap();
        assert_eq!(got.name(), "Ada King");
        assert_eq!(got.email(), "ada@x.org");
    }

    #[test]
    fn mutating_a_returned_copy_does_not_touch_the_store() {
        let store = StoreFixture::new().with_contact(1, "Ada", "ada@x.org").store;
        let mut c = store.get(1).unwrap();
        c.update("Changed", "changed@x.org");
        assert_eq!(store.get(1).unwrap().name(), "Ada");
    }

    #[test]
    fn remove_then_get_is_none() {
        let mut store = StoreFixture::new().with_contacts(3).store;
        store.remove(3).unwrap();
        assert!(store.get(3).is_none());
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut store = StoreFixture::new().with_contacts(1).store;
        assert!(matches!(store.remove(9), Err(CrmError::NotFound(9))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn from_contacts_last_duplicate_wins() {
        let store = InMemoryStore::from_contacts(vec![
            contact(1, "First", "f@x.com"),
            contact(1, "Second", "s@x.com"),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().name(), "Second");
    }
}
