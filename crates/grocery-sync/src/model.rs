//! Grocery Models
//!
//! Data structures matching the remote store's JSON entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier assigned by the remote store
pub type ItemId = u32;

/// Display format the remote store uses for purchase timestamps
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%B %d, %Y %H:%M";

/// A single grocery list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    /// Marked as collected
    #[serde(default)]
    pub added_to_cart: bool,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            added_to_cart: false,
        }
    }

    /// Name/quantity copy kept in a purchase record
    pub fn snapshot(&self) -> PurchasedItem {
        PurchasedItem {
            name: self.name.clone(),
            quantity: self.quantity,
        }
    }
}

/// Validated name/quantity pair sent on create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u32,
}

impl ItemDraft {
    /// Trim the name and check both fields.
    pub fn parse(name: &str, quantity: u32) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        Ok(Self {
            name: name.to_string(),
            quantity,
        })
    }
}

/// Name/quantity captured when an item was purchased
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasedItem {
    pub name: String,
    pub quantity: u32,
}

/// One purchase event, newest first in the history cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Server-formatted creation time, kept verbatim for display
    pub timestamp: String,
    pub items: Vec<PurchasedItem>,
}

impl HistoryRecord {
    pub fn purchased_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, HISTORY_TIMESTAMP_FORMAT).ok()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
