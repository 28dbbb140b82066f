use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CrmError, Result};
use crate::model::ContactId;
use crate::store::ContactStore;

/// Read-modify-write. Blank `name`/`email` keep the current values.
pub fn run<S: ContactStore>(
    store: &mut S,
    id: ContactId,
    name: &str,
    email: &str,
) -> Result<CmdResult> {
    let mut contact = super::get::run(&*store, id).ok_or(CrmError::NotFound(id))?;
    contact.update(name, email);
    store.update(&contact)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated ({}): {}",
        contact.id(),
        contact.name()
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
