use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::db::contact_file;
use crate::error::{ContactError, ContactResult};
use crate::model::{Contact, NameKey};

/// The in-memory contact book, keyed by lower-cased name and bound to the
/// file it is persisted to.
#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    contacts: BTreeMap<NameKey, Contact>,
}

impl ContactStore {
    /// An empty store that will save to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contacts: BTreeMap::new(),
        }
    }

    /// Loads the store from `path`.
    ///
    /// A missing file yields an empty store. An unreadable or malformed file
    /// also yields an empty store, and the error is handed back as a warning
    /// for the caller to display.
    pub fn load(path: impl Into<PathBuf>) -> (Self, Option<ContactError>) {
        let mut store = Self::new(path);

        match contact_file::read(&store.path) {
            Ok(None) => {
                log::info!(
                    "No contacts file at {}, starting with an empty contact book",
                    store.path.display()
                );
            }
            Ok(Some(records)) => {
                for contact in records {
                    let key = contact.key();
                    if store.contacts.contains_key(&key) {
                        log::warn!(
                            "Dropping duplicate contact '{}' (key {}) from {}",
                            contact.name,
                            key,
                            store.path.display()
                        );
                        continue;
                    }
                    store.contacts.insert(key, contact);
                }
                log::info!("Loaded {} contacts from {}", store.contacts.len(), store.path.display());
            }
            Err(e) => {
                log::warn!("{}; starting with an empty contact book", e);
                return (store, Some(e));
            }
        }

        (store, None)
    }

    /// Overwrites the persistence file with the full current set of contacts.
    pub fn save(&self) -> ContactResult<()> {
        match contact_file::write(&self.path, self.contacts.values()) {
            Ok(()) => {
                log::debug!("Saved {} contacts to {}", self.contacts.len(), self.path.display());
                Ok(())
            }
            Err(e) => {
                log::warn!("{}", e);
                Err(e)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, key: &NameKey) -> Option<&Contact> {
        self.contacts.get(key)
    }

    pub fn contains(&self, key: &NameKey) -> bool {
        self.contacts.contains_key(key)
    }

    /// All contacts in name-key order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// Inserts `contact` under its name key, returning any record it replaced.
    pub(crate) fn insert(&mut self, contact: Contact) -> Option<Contact> {
        self.contacts.insert(contact.key(), contact)
    }

    pub(crate) fn remove(&mut self, key: &NameKey) -> Option<Contact> {
        self.contacts.remove(key)
    }
}
