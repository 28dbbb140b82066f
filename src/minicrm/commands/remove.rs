use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CrmError, Result};
use crate::model::ContactId;
use crate::store::ContactStore;

pub fn run<S: ContactStore>(store: &mut S, id: ContactId) -> Result<CmdResult> {
    let contact = super::get::run(&*store, id).ok_or(CrmError::NotFound(id))?;
    store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact removed ({}): {}",
        contact.id(),
        contact.name()
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_existing_contact() {
        let mut store = StoreFixture::new().with_contacts(3).store;
        let result = run(&mut store, 3).unwrap();
        assert_eq!(result.affected_contacts[0].id(), 3);
        assert!(store.get(3).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = StoreFixture::new().with_contacts(1).store;
        assert!(matches!(run(&mut store, 3), Err(CrmError::NotFound(3))));
        assert_eq!(store.len(), 1);
    }
}
