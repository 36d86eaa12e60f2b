pub mod contact_file;
pub mod contact_store;

pub use contact_store::ContactStore;
