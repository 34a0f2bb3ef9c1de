//! Local preference persistence.
//!
//! A synchronous store over a pluggable key-value backend. Unlike a browser
//! storage wrapper that swallows failures, every operation here returns a
//! [`StoreError`] so callers can tell "nothing saved yet" (`Ok(None)` or a
//! default document) from "storage is broken".

pub mod backend;
pub mod error;
pub mod model;
pub mod store;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use error::StoreError;
pub use model::{
    AgendaItem, AgendaKind, NewAgendaItem, Notification, NotificationKind, Priority, StorageData,
    StoragePatch,
};
pub use store::{PreferenceStore, ADDRESS_KEY, DATA_KEY};
