//! Per-item sequencing
//!
//! Each item id gets a FIFO lane. A mutation holds the lane of its item from
//! snapshot until reconciliation, so a second mutation on the same item is
//! computed from the first one's resolved state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::model::ItemId;

type Lanes = Rc<RefCell<HashMap<ItemId, Arc<Mutex<()>>>>>;

#[derive(Debug, Default)]
pub(crate) struct Sequencer {
    lanes: Lanes,
}

/// Held lane; released on drop
#[derive(Debug)]
pub(crate) struct Permit {
    id: ItemId,
    guard: Option<OwnedMutexGuard<()>>,
    lanes: Lanes,
}

impl Sequencer {
    /// Wait for earlier mutations on `id` to resolve
    pub(crate) async fn acquire(&self, id: ItemId) -> Permit {
        let lane = self.lanes.borrow_mut().entry(id).or_default().clone();
        let guard = lane.lock_owned().await;
        Permit {
            id,
            guard: Some(guard),
            lanes: Rc::clone(&self.lanes),
        }
    }

    /// Acquire several lanes in ascending id order
    pub(crate) async fn acquire_all(&self, mut ids: Vec<ItemId>) -> Vec<Permit> {
        ids.sort_unstable();
        ids.dedup();
        let mut permits = Vec::with_capacity(ids.len());
        for id in ids {
            permits.push(self.acquire(id).await);
        }
        permits
    }

    pub(crate) fn is_busy(&self, id: ItemId) -> bool {
        self.lanes.borrow().contains_key(&id)
    }

    /// Ids with a mutation holding or waiting on their lane
    pub(crate) fn busy_ids(&self) -> Vec<ItemId> {
        self.lanes.borrow().keys().copied().collect()
    }
}

impl Drop for Permit {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut lanes = self.lanes.borrow_mut();
        // only the map still refers to the lane: nobody holds or waits on it
        if lanes.get(&self.id).is_some_and(|lane| Arc::strong_count(lane) == 1) {
            lanes.remove(&self.id);
        }
    }
}
