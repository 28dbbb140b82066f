//! # Contact Service
//!
//! The service is the single entry point for contact operations, whatever UI
//! drives it. It:
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Fans out** a notification after every successful mutation
//! - **Returns structured types** (`Result<CmdResult>`, `Option<Contact>`)
//!
//! It never prints and never reads input.
//!
//! ## Generic Over ContactStore
//!
//! `ContactService<S: ContactStore>` works with any backend:
//! - Production: `ContactService<Box<dyn ContactStore>>`, picked from config
//! - Testing: `ContactService<InMemoryStore>`
//!
//! ## Notifications
//!
//! Notifiers run after the store call has succeeded, in registration order.
//! A notifier error is logged and swallowed. It never fails the operation and
//! never undoes the store change.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Contact, ContactId};
use crate::notify::Notifier;
use crate::store::ContactStore;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct ContactService<S: ContactStore> {
    store: S,
    notifiers: Vec<Box<dyn Notifier>>,
}

impl<S: ContactStore> ContactService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            notifiers: Vec::new(),
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifiers.push(notifier);
        self
    }

    pub fn with_notifiers(mut self, notifiers: Vec<Box<dyn Notifier>>) -> Self {
        self.notifiers.extend(notifiers);
        self
    }

    pub fn add_contact(&mut self, id: ContactId, name: &str, email: &str) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, id, name, email)?;
        tracing::info!(id, "contact added");
        self.notify_affected(&result, "New contact added");
        Ok(result)
    }

    pub fn get_contact(&self, id: ContactId) -> Option<Contact> {
        commands::get::run(&self.store, id)
    }

    pub fn list_contacts(&self) -> CmdResult {
        commands::list::run(&self.store)
    }

    pub fn update_contact(&mut self, id: ContactId, name: &str, email: &str) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, id, name, email)?;
        tracing::info!(id, "contact updated");
        self.notify_affected(&result, "Contact updated");
        Ok(result)
    }

    pub fn remove_contact(&mut self, id: ContactId) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.store, id)?;
        tracing::info!(id, "contact removed");
        self.notify_affected(&result, "Contact removed");
        Ok(result)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn notify_affected(&mut self, result: &CmdResult, what: &str) {
        for contact in &result.affected_contacts {
            self.notify_all(&format!("{}: {}", what, contact.name()));
        }
    }

    fn notify_all(&mut self, message: &str) {
        for notifier in self.notifiers.iter_mut() {
            if let Err(e) = notifier.send(message) {
                tracing::warn!(notifier = notifier.name(), error = %e, "notification failed");
            }
        }
    }
}
