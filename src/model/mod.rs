pub mod name_key;
pub mod contact;

// Re-exports for convenience
pub use name_key::NameKey;
pub use contact::Contact;
