//! Item Store and History Cache
//!
//! Plain data holders. The coordinator is their only writer; every write
//! replaces the whole value so before/after states stay comparable.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{HistoryRecord, Item};

/// Current ordered grocery list
pub trait ItemStore {
    fn get(&self) -> Vec<Item>;
    fn set(&self, items: Vec<Item>);
}

/// Past purchases, newest first
pub trait HistoryCache {
    fn get(&self) -> Vec<HistoryRecord>;
    fn prepend(&self, record: HistoryRecord);
    /// Full replacement, used by the initial load
    fn replace(&self, records: Vec<HistoryRecord>);
}

/// Shared in-memory item list
#[derive(Clone, Debug, Default)]
pub struct MemoryItemStore {
    items: Rc<RefCell<Vec<Item>>>,
}

impl MemoryItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }
}

impl ItemStore for MemoryItemStore {
    fn get(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    fn set(&self, items: Vec<Item>) {
        *self.items.borrow_mut() = items;
    }
}

/// Shared in-memory history log
#[derive(Clone, Debug, Default)]
pub struct MemoryHistoryCache {
    records: Rc<RefCell<Vec<HistoryRecord>>>,
}

impl MemoryHistoryCache {
    pub fn new(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: Rc::new(RefCell::new(records)),
        }
    }
}

impl HistoryCache for MemoryHistoryCache {
    fn get(&self) -> Vec<HistoryRecord> {
        self.records.borrow().clone()
    }

    fn prepend(&self, record: HistoryRecord) {
        self.records.borrow_mut().insert(0, record);
    }

    fn replace(&self, records: Vec<HistoryRecord>) {
        *self.records.borrow_mut() = records;
    }
}
