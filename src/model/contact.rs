use serde::{Deserialize, Serialize};

use super::name_key::NameKey;

/// A single entry in the contact book. Serialized as exactly the three keys
/// `name`, `phone` and `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn create(name: String, phone: String, email: String) -> Self {
        Self { name, phone, email }
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(&self.name)
    }
}
