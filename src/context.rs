//! Application Context
//!
//! Shared state provided via Leptos Context API: the mutation coordinator
//! plus UI-only signals (which card is in edit mode, the failure notice).

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use grocery_sync::{HttpRemote, ItemId, MutationCoordinator};

use crate::store::{HistoryHandle, ItemsHandle};

pub type Coordinator = MutationCoordinator<HttpRemote, ItemsHandle, HistoryHandle>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Coordinator lives on the UI thread only
    coordinator: StoredValue<Rc<Coordinator>, LocalStorage>,
    /// Item whose card is in edit mode - read
    pub editing_id: ReadSignal<Option<ItemId>>,
    /// Item whose card is in edit mode - write
    set_editing_id: WriteSignal<Option<ItemId>>,
    /// Message of the last failed operation - read
    pub notice: ReadSignal<Option<String>>,
    /// Message of the last failed operation - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        coordinator: Coordinator,
        editing_id: (ReadSignal<Option<ItemId>>, WriteSignal<Option<ItemId>>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            coordinator: StoredValue::new_local(Rc::new(coordinator)),
            editing_id: editing_id.0,
            set_editing_id: editing_id.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Run a coordinator operation in the background
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<Coordinator>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let coordinator = self.coordinator.get_value();
        spawn_local(op(coordinator));
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.editing_id.get() == Some(id)
    }

    pub fn start_editing(&self, id: ItemId) {
        self.set_editing_id.set(Some(id));
    }

    pub fn stop_editing(&self) {
        self.set_editing_id.set(None);
    }

    pub fn show_notice(&self, message: String) {
        self.set_notice.set(Some(message));
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}
