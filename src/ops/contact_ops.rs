use crate::db::ContactStore;
use crate::error::{ContactError, ContactResult};
use crate::model::{Contact, NameKey};
use crate::validation::{self, trim_field, trim_optional};

/// Adds a new contact and saves the store.
///
/// If the save fails the contact stays in memory and `ContactError::Save` is
/// returned.
pub fn add_contact(
    store: &mut ContactStore,
    name: &str,
    phone: &str,
    email: &str,
) -> ContactResult<Contact> {
    let valid_name = validation::non_blank(name, "Name")?;

    if store.contains(&NameKey::new(&valid_name)) {
        return Err(ContactError::DuplicateName { name: valid_name });
    }

    let contact = Contact::create(valid_name, trim_field(phone), trim_field(email));
    store.insert(contact.clone());
    log::info!("Added contact {}", contact.name);

    store.save()?;
    Ok(contact)
}

/// Replaces `target` with a record built from the supplied fields. Blank
/// fields keep the target's current value.
pub fn update_contact(
    store: &mut ContactStore,
    target: Option<&Contact>,
    name: &str,
    phone: &str,
    email: &str,
) -> ContactResult<Contact> {
    let current = resolve_target(store, target, "update")?;
    let current_key = current.key();

    let new_name = trim_optional(name);
    if let Some(n) = &new_name {
        let new_key = NameKey::new(n);
        if new_key != current_key && store.contains(&new_key) {
            return Err(ContactError::DuplicateName { name: n.clone() });
        }
    }

    let updated = Contact::create(
        new_name.unwrap_or_else(|| current.name.clone()),
        trim_optional(phone).unwrap_or_else(|| current.phone.clone()),
        trim_optional(email).unwrap_or_else(|| current.email.clone()),
    );

    store.remove(&current_key);
    store.insert(updated.clone());
    log::info!("Updated contact {} -> {}", current.name, updated.name);

    store.save()?;
    Ok(updated)
}

/// Removes `target` from the store and saves. Returns the removed contact.
pub fn delete_contact(store: &mut ContactStore, target: Option<&Contact>) -> ContactResult<Contact> {
    let current = resolve_target(store, target, "delete")?;

    let removed = store.remove(&current.key()).unwrap_or(current);
    log::info!("Deleted contact {}", removed.name);

    store.save()?;
    Ok(removed)
}

/// Resolves the selected contact to the record currently stored under its key.
pub fn resolve_target(store: &ContactStore, target: Option<&Contact>, action: &str) -> ContactResult<Contact> {
    let target = target.ok_or_else(|| ContactError::NothingSelected {
        action: action.into(),
    })?;

    store
        .get(&target.key())
        .cloned()
        .ok_or_else(|| ContactError::NotFound {
            name: target.name.clone(),
        })
}
