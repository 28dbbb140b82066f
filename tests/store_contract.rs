use minicrm::error::CrmError;
use minicrm::model::{Contact, ContactId};
use minicrm::store::json::JsonFileStore;
use minicrm::store::memory::InMemoryStore;
use minicrm::store::ContactStore;
use tempfile::TempDir;

fn contact(id: ContactId, name: &str, email: &str) -> Contact {
    Contact::new(id, name, email).unwrap()
}

fn sorted(mut contacts: Vec<Contact>) -> Vec<Contact> {
    contacts.sort_by_key(Contact::id);
    contacts
}

/// The behaviour every backend must share.
fn check_contract<S: ContactStore>(mut store: S) {
    // Add then get
    store.add(contact(1, "Ada Lovelace", "ada@x.org")).unwrap();
    let ada = store.get(1).unwrap();
    assert_eq!((ada.name(), ada.email()), ("Ada Lovelace", "ada@x.org"));

    // Duplicate id leaves the store unchanged
    let before = sorted(store.list());
    assert!(matches!(
        store.add(contact(1, "B", "b@x.com")),
        Err(CrmError::DuplicateId(1))
    ));
    assert_eq!(sorted(store.list()), before);

    // Misses are None, not errors
    assert!(store.get(99).is_none());

    // Update / remove on absent ids
    assert!(matches!(
        store.update(&contact(5, "New Name", "n@x.com")),
        Err(CrmError::NotFound(5))
    ));
    assert!(matches!(store.remove(5), Err(CrmError::NotFound(5))));

    // Update replaces mutable fields
    let mut changed = store.get(1).unwrap();
    changed.update("", "ada@lovelace.org");
    store.update(&changed).unwrap();
    assert_eq!(store.get(1).unwrap().email(), "ada@lovelace.org");

    // List is stable without mutation
    store.add(contact(3, "Cy", "cy@x.org")).unwrap();
    assert_eq!(sorted(store.list()), sorted(store.list()));
    assert_eq!(store.list().len(), 2);

    // Remove
    store.remove(3).unwrap();
    assert!(store.get(3).is_none());
    assert_eq!(store.list().len(), 1);
}

#[test]
fn in_memory_store_satisfies_contract() {
    check_contract(InMemoryStore::new());
}

#[test]
fn json_file_store_satisfies_contract() {
    let dir = TempDir::new().unwrap();
    check_contract(JsonFileStore::open(dir.path().join("contacts.json")).unwrap());
}

#[test]
fn boxed_store_satisfies_contract() {
    let store: Box<dyn ContactStore> = Box::new(InMemoryStore::new());
    check_contract(store);
}

#[test]
fn json_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    assert!(store.list().is_empty());
    for (id, name) in [(10, "Grace"), (2, "Alan"), (7, "Edsger")] {
        store
            .add(contact(id, name, &format!("{}@x.org", name.to_lowercase())))
            .unwrap();
    }
    let before = sorted(store.list());
    drop(store);

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(sorted(reopened.list()), before);
}
