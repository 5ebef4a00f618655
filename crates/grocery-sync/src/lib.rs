//! Grocery Sync Core
//!
//! Layered like the app it serves:
//! - model: items and purchase records as the remote store sends them
//! - store: item store and history cache holders
//! - remote: the remote store client (trait + HTTP)
//! - mutation / coordinator: optimistic apply, reconcile, rollback

mod config;
mod coordinator;
mod error;
mod model;
mod mutation;
mod remote;
mod sequencer;
mod store;

#[cfg(test)]
mod testing;

pub use config::{SyncConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use coordinator::{MutationCoordinator, MutationFailure, Outcome, SkipReason};
pub use error::{RemoteError, ValidationError};
pub use model::{HistoryRecord, Item, ItemDraft, ItemId, PurchasedItem, HISTORY_TIMESTAMP_FORMAT};
pub use mutation::{Confirmation, Mutation, MutationKind, Operation};
pub use remote::{GroceryRemote, HttpRemote, RemoteResult};
pub use store::{HistoryCache, ItemStore, MemoryHistoryCache, MemoryItemStore};
