pub mod documents;

pub use documents::{DocumentStore, StorageError, StoredDocument};
