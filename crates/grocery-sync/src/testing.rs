//! In-memory remote store for coordinator tests.
//!
//! Behaves like the real API, and can be told to fail the next call of a
//! kind or to hold a call until the test releases it.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::coordinator::{MutationCoordinator, MutationFailure};
use crate::error::RemoteError;
use crate::model::{HistoryRecord, Item, ItemDraft, ItemId};
use crate::remote::{GroceryRemote, RemoteResult};
use crate::store::{MemoryHistoryCache, MemoryItemStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Call {
    ListItems,
    Create,
    Update,
    Delete,
    Toggle,
    Purchase,
    ListHistory,
    LatestHistory,
}

#[derive(Default)]
pub(crate) struct FakeRemote {
    server: RefCell<Vec<Item>>,
    history: RefCell<Vec<HistoryRecord>>,
    next_id: Cell<ItemId>,
    failures: RefCell<HashMap<Call, usize>>,
    gates: RefCell<HashMap<Call, VecDeque<oneshot::Receiver<()>>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeRemote {
    pub(crate) fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let remote = Self::default();
        remote.next_id.set(next_id);
        *remote.server.borrow_mut() = items;
        remote
    }

    pub(crate) fn with_history(self, history: Vec<HistoryRecord>) -> Self {
        *self.history.borrow_mut() = history;
        self
    }

    /// Fail the next call of this kind with a 500
    pub(crate) fn fail_next(&self, call: Call) {
        *self.failures.borrow_mut().entry(call).or_default() += 1;
    }

    /// Hold the next call of this kind until the returned sender fires
    pub(crate) fn hold(&self, call: Call) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.gates.borrow_mut().entry(call).or_default().push_back(gate);
        release
    }

    pub(crate) fn count(&self, call: Call) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub(crate) fn server_items(&self) -> Vec<Item> {
        self.server.borrow().clone()
    }

    pub(crate) fn server_history(&self) -> Vec<HistoryRecord> {
        self.history.borrow().clone()
    }

    async fn enter(&self, call: Call) -> RemoteResult<()> {
        self.calls.borrow_mut().push(call);
        let gate = self
            .gates
            .borrow_mut()
            .get_mut(&call)
            .and_then(|queue| queue.pop_front());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let mut failures = self.failures.borrow_mut();
        match failures.get_mut(&call) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                Err(RemoteError::Status {
                    status: 500,
                    message: format!("{:?} failed", call),
                })
            }
            _ => Ok(()),
        }
    }
}

fn not_found(id: ItemId) -> RemoteError {
    RemoteError::Status {
        status: 404,
        message: format!("item {} not found", id),
    }
}

#[async_trait(?Send)]
impl GroceryRemote for FakeRemote {
    async fn list_items(&self) -> RemoteResult<Vec<Item>> {
        self.enter(Call::ListItems).await?;
        Ok(self.server_items())
    }

    async fn create_item(&self, draft: &ItemDraft) -> RemoteResult<Item> {
        self.enter(Call::Create).await?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let item = Item::new(id, draft.name.clone(), draft.quantity);
        self.server.borrow_mut().insert(0, item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, draft: &ItemDraft) -> RemoteResult<Item> {
        self.enter(Call::Update).await?;
        let mut server = self.server.borrow_mut();
        let item = server.iter_mut().find(|item| item.id == id).ok_or_else(|| not_found(id))?;
        item.name = draft.name.clone();
        item.quantity = draft.quantity;
        Ok(item.clone())
    }

    async fn delete_item(&self, id: ItemId) -> RemoteResult<()> {
        self.enter(Call::Delete).await?;
        self.server.borrow_mut().retain(|item| item.id != id);
        Ok(())
    }

    async fn toggle_item(&self, id: ItemId) -> RemoteResult<()> {
        self.enter(Call::Toggle).await?;
        let mut server = self.server.borrow_mut();
        let item = server.iter_mut().find(|item| item.id == id).ok_or_else(|| not_found(id))?;
        item.added_to_cart = !item.added_to_cart;
        Ok(())
    }

    async fn purchase(&self) -> RemoteResult<()> {
        self.enter(Call::Purchase).await?;
        let mut server = self.server.borrow_mut();
        let purchased: Vec<_> = server
            .iter()
            .filter(|item| item.added_to_cart)
            .map(Item::snapshot)
            .collect();
        if purchased.is_empty() {
            return Err(RemoteError::Status {
                status: 400,
                message: "No items in cart".into(),
            });
        }
        server.retain(|item| !item.added_to_cart);
        let mut history = self.history.borrow_mut();
        let timestamp = format!("January {:02}, 2025 10:00", history.len() + 1);
        history.insert(0, HistoryRecord { timestamp, items: purchased });
        Ok(())
    }

    async fn list_history(&self) -> RemoteResult<Vec<HistoryRecord>> {
        self.enter(Call::ListHistory).await?;
        Ok(self.server_history())
    }

    async fn latest_history(&self) -> RemoteResult<Option<HistoryRecord>> {
        self.enter(Call::LatestHistory).await?;
        Ok(self.history.borrow().first().cloned())
    }
}

pub(crate) type TestCoordinator = MutationCoordinator<FakeRemote, MemoryItemStore, MemoryHistoryCache>;

/// Coordinator whose local list already mirrors the server's, plus the
/// failures it reported
pub(crate) fn setup(items: Vec<Item>) -> (TestCoordinator, Rc<RefCell<Vec<MutationFailure>>>) {
    let failures = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&failures);
    let coordinator = MutationCoordinator::new(
        FakeRemote::with_items(items.clone()),
        MemoryItemStore::new(items),
        MemoryHistoryCache::default(),
    )
    .with_failure_handler(move |failure| sink.borrow_mut().push(failure.clone()));
    (coordinator, failures)
}

pub(crate) fn item(id: ItemId, name: &str, quantity: u32, cart: bool) -> Item {
    Item {
        id,
        name: name.to_string(),
        quantity,
        added_to_cart: cart,
    }
}

pub(crate) fn groceries() -> Vec<Item> {
    vec![
        item(1, "Milk", 2, true),
        item(2, "Bread", 1, false),
        item(3, "Apples", 3, true),
    ]
}
