use super::memory::InMemoryStore;
use super::ContactStore;
use crate::error::{PersistenceError, Result};
use crate::model::{Contact, ContactId};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Contacts held in memory and mirrored to a JSON document.
///
/// The document is read once by [`JsonFileStore::open`]. Reads never touch
/// the disk afterwards. Every successful mutation rewrites the whole document
/// through a temp file and a rename. If that write fails, the in-memory
/// change is rolled back before the error is returned, so memory and disk
/// never disagree once a call has returned.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    contacts: InMemoryStore,
}

impl JsonFileStore {
    /// Open the store backed by `path`. A missing document is an empty store;
    /// an unreadable or malformed one is an error.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let contacts = load(&path)?;
        Ok(Self { path, contacts })
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn save(&self) -> std::result::Result<(), PersistenceError> {
        let sorted = self.contacts.sorted();
        let mut content =
            serde_json::to_string_pretty(&sorted).map_err(PersistenceError::Encode)?;
        content.push('\n');

        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(|source| PersistenceError::Write {
            path: dir.to_path_buf(),
            source,
        })?;

        // Atomic write
        let tmp_path = dir.join(format!(
            ".{}-{}.tmp",
            file_name(&self.path),
            Uuid::new_v4()
        ));
        if let Err(source) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::Write {
                path: tmp_path,
                source,
            });
        }
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PersistenceError::Write {
                path: self.path.clone(),
                source,
            });
        }

        tracing::debug!(path = %self.path.display(), count = sorted.len(), "saved contacts");
        Ok(())
    }

    /// Persist the current state, undoing the last in-memory change if the
    /// write fails.
    fn write_back<F>(&mut self, undo: F) -> Result<()>
    where
        F: FnOnce(&mut InMemoryStore),
    {
        match self.save() {
            Ok(()) => Ok(()),
            Err(err) => {
                undo(&mut self.contacts);
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "write-back failed, in-memory change rolled back"
                );
                Err(err.into())
            }
        }
    }
}

impl ContactStore for JsonFileStore {
    fn add(&mut self, contact: Contact) -> Result<()> {
        let id = contact.id();
        self.contacts.add(contact)?;
        self.write_back(|contacts| {
            let _ = contacts.take(id);
        })
    }

    fn get(&self, id: ContactId) -> Option<Contact> {
        self.contacts.get(id)
    }

    fn list(&self) -> Vec<Contact> {
        self.contacts.list()
    }

    fn update(&mut self, contact: &Contact) -> Result<()> {
        let previous = self.contacts.replace(contact)?;
        self.write_back(|contacts| contacts.restore(previous))
    }

    fn remove(&mut self, id: ContactId) -> Result<()> {
        let removed = self.contacts.take(id)?;
        self.write_back(|contacts| contacts.restore(removed))
    }
}

fn load(path: &Path) -> std::result::Result<InMemoryStore, PersistenceError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no contacts file yet, starting empty");
            return Ok(InMemoryStore::new());
        }
        Err(source) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    // A bare `null` document is an empty list
    let contacts: Vec<Contact> = serde_json::from_str::<Option<Vec<Contact>>>(&content)
        .map_err(|source| PersistenceError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .unwrap_or_default();

    let mut seen = HashSet::new();
    for c in &contacts {
        if !seen.insert(c.id()) {
            tracing::warn!(
                path = %path.display(),
                id = c.id(),
                "duplicate id in contacts file, keeping the later entry"
            );
        }
    }

    let store = InMemoryStore::from_contacts(contacts);
    tracing::debug!(path = %path.display(), count = store.len(), "loaded contacts");
    Ok(store)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "contacts".to_string())
}
