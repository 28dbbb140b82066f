use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Contact, ContactId};
use crate::store::ContactStore;

pub fn run<S: ContactStore>(
    store: &mut S,
    id: ContactId,
    name: &str,
    email: &str,
) -> Result<CmdResult> {
    let contact = Contact::new(id, name, email)?;
    store.add(contact.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added ({}): {}",
        contact.id(),
        contact.name()
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
