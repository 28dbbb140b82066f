use crate::commands::CmdResult;
use crate::model::Contact;
use crate::store::ContactStore;

/// Every contact, sorted by id for display.
pub fn run<S: ContactStore>(store: &S) -> CmdResult {
    let mut contacts = store.list();
    contacts.sort_by_key(Contact::id);
    CmdResult::default().with_listed_contacts(contacts)
}
