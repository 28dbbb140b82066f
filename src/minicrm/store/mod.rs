//! # Storage Layer
//!
//! The [`ContactStore`] trait is the storage contract every backend satisfies.
//! The service and command layers only ever see the trait, so a new backend
//! (another file format, a database) plugs in without touching them.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a plain `HashMap`, nothing survives the process.
//! - [`json::JsonFileStore`]: the same map mirrored to a JSON document. The
//!   document is read once on open and rewritten in full after every
//!   successful mutation.
//!
//! ## Ownership
//!
//! Stores own their contacts by value. `get` and `list` hand out clones, and
//! the only way to change a stored contact is to pass a modified copy to
//! `update`. Nothing outside the store can mutate its state in place.
//!
//! ## Storage Format
//!
//! For `JsonFileStore`, a single array of objects:
//! ```text
//! [
//!   {
//!     "ID": 1,
//!     "Name": "Ada Lovelace",
//!     "Email": "ada@x.org"
//!   }
//! ]
//! ```
//!
//! Stores assume a single owner. There is no locking: two processes writing
//! the same document race, and the last rename wins.

use crate::config::Backend;
use crate::error::Result;
use crate::model::{Contact, ContactId};
use std::path::Path;

pub mod json;
pub mod memory;

/// Abstract interface for contact storage.
pub trait ContactStore {
    /// Insert a new contact. Fails with `DuplicateId` if the id is taken.
    fn add(&mut self, contact: Contact) -> Result<()>;

    /// Look up a contact by id. A miss is `None`, not an error.
    fn get(&self, id: ContactId) -> Option<Contact>;

    /// Snapshot of every stored contact, in no particular order.
    fn list(&self) -> Vec<Contact>;

    /// Replace the stored contact with the same id. Fails with `NotFound`
    /// if there is none.
    fn update(&mut self, contact: &Contact) -> Result<()>;

    /// Delete a contact. Fails with `NotFound` if there is none.
    fn remove(&mut self, id: ContactId) -> Result<()>;
}

impl<S: ContactStore + ?Sized> ContactStore for Box<S> {
    fn add(&mut self, contact: Contact) -> Result<()> {
        (**self).add(contact)
    }

    fn get(&self, id: ContactId) -> Option<Contact> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Contact> {
        (**self).list()
    }

    fn update(&mut self, contact: &Contact) -> Result<()> {
        (**self).update(contact)
    }

    fn remove(&mut self, id: ContactId) -> Result<()> {
        (**self).remove(id)
    }
}

/// Build the configured backend. `data_file` is ignored for the memory backend.
pub fn open_store(backend: Backend, data_file: &Path) -> Result<Box<dyn ContactStore>> {
    match backend {
        Backend::Memory => Ok(Box::new(memory::InMemoryStore::new())),
        Backend::Json => Ok(Box::new(json::JsonFileStore::open(data_file)?)),
    }
}
