//! Persistence for the WFRP helper.
//!
//! A [`KeyValueStore`] holds text documents by key; [`Vault`] keeps the
//! wallet and settings records in it. Failures never touch in-memory state:
//! loading falls back to defaults, saving reports a [`StorageError`].

pub mod config;
pub mod error;
pub mod store;
pub mod transfer;
pub mod vault;

pub use config::{DEFAULT_DATA_DIR, SETTINGS_KEY, StoreConfig, WALLET_KEY};
pub use error::{StorageError, StoreResult, TransferError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use transfer::{read_payload, write_payload};
pub use vault::Vault;
