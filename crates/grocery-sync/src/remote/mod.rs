//! Remote Sync Client
//!
//! Abstract CRUD surface of the remote grocery store.
//! One attempt per call; retries are not this layer's concern.

mod http;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::model::{HistoryRecord, Item, ItemDraft, ItemId};

pub use http::HttpRemote;

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Calls against the remote store.
///
/// Futures are not required to be `Send`: the browser HTTP client is
/// single-threaded.
#[async_trait(?Send)]
pub trait GroceryRemote {
    /// Current list, newest first
    async fn list_items(&self) -> RemoteResult<Vec<Item>>;

    /// Not idempotent; the server assigns the id
    async fn create_item(&self, draft: &ItemDraft) -> RemoteResult<Item>;

    /// Last write wins on the server
    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> RemoteResult<Item>;

    async fn delete_item(&self, id: ItemId) -> RemoteResult<()>;

    /// Flips the collected flag server-side
    async fn toggle_item(&self, id: ItemId) -> RemoteResult<()>;

    /// Moves every collected item into a new history record
    async fn purchase(&self) -> RemoteResult<()>;

    async fn list_history(&self) -> RemoteResult<Vec<HistoryRecord>>;

    async fn latest_history(&self) -> RemoteResult<Option<HistoryRecord>>;
}
