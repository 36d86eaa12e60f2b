use crate::db::ContactStore;
use crate::model::{Contact, NameKey};

/// Finds the contact whose name matches `name` case-insensitively.
pub fn find_by_name<'a>(store: &'a ContactStore, name: &str) -> Option<&'a Contact> {
    store.get(&NameKey::new(name))
}

/// All contacts ordered by name (case-sensitive). Recomputed on every call.
pub fn list_sorted(store: &ContactStore) -> impl Iterator<Item = &Contact> {
    let mut contacts: Vec<&Contact> = store.contacts().collect();
    contacts.sort_by(|a, b| a.name.cmp(&b.name));
    contacts.into_iter()
}

/// Contacts whose name, phone or email contains `query`, ignoring case.
pub fn search<'a>(store: &'a ContactStore, query: &str) -> Vec<&'a Contact> {
    let lower = query.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }

    list_sorted(store)
        .filter(|c| {
            c.name.to_lowercase().contains(&lower)
                || c.phone.to_lowercase().contains(&lower)
                || c.email.to_lowercase().contains(&lower)
        })
        .collect()
}
