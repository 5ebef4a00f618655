//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The coordinator
//! writes through the handles below; components only read.

use leptos::prelude::*;
use reactive_stores::Store;
use grocery_sync::{HistoryCache, HistoryRecord, Item, ItemStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current grocery list, newest first
    pub items: Vec<Item>,
    /// Purchase records, newest first
    pub history: Vec<HistoryRecord>,
    /// Initial load still running
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Coordinator Handles
// ========================

/// Item list as seen by the coordinator
#[derive(Clone, Copy)]
pub struct ItemsHandle(pub AppStore);

impl ItemStore for ItemsHandle {
    fn get(&self) -> Vec<Item> {
        self.0.items().get_untracked()
    }

    fn set(&self, items: Vec<Item>) {
        *self.0.items().write() = items;
    }
}

/// Purchase history as seen by the coordinator
#[derive(Clone, Copy)]
pub struct HistoryHandle(pub AppStore);

impl HistoryCache for HistoryHandle {
    fn get(&self) -> Vec<HistoryRecord> {
        self.0.history().get_untracked()
    }

    fn prepend(&self, record: HistoryRecord) {
        self.0.history().write().insert(0, record);
    }

    fn replace(&self, records: Vec<HistoryRecord>) {
        *self.0.history().write() = records;
    }
}

// ========================
// Store Helper Functions
// ========================

/// Number of items marked as collected (tracked)
pub fn store_collected_count(store: &AppStore) -> usize {
    store.items().read().iter().filter(|item| item.added_to_cart).count()
}

/// Mark the initial load as finished
pub fn store_finish_loading(store: &AppStore) {
    *store.loading().write() = false;
}
