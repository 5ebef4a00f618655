//! Mutation
//!
//! One optimistic change as a value: the list before it, the list the user
//! should see while the remote call is pending, how to fold the server's
//! answer into the latest list, and the list to restore on failure.

use std::fmt;

use crate::model::{Item, ItemDraft, ItemId, PurchasedItem};

/// User intents, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Add(ItemDraft),
    Toggle(ItemId),
    Edit(ItemId, ItemDraft),
    Delete(ItemId),
    Purchase,
}

impl MutationKind {
    pub fn operation(&self) -> Operation {
        match self {
            MutationKind::Add(_) => Operation::Add,
            MutationKind::Toggle(_) => Operation::Toggle,
            MutationKind::Edit(..) => Operation::Edit,
            MutationKind::Delete(_) => Operation::Delete,
            MutationKind::Purchase => Operation::Purchase,
        }
    }

    /// Item the mutation targets, if it targets exactly one
    pub fn target(&self) -> Option<ItemId> {
        match self {
            MutationKind::Toggle(id) | MutationKind::Edit(id, _) | MutationKind::Delete(id) => {
                Some(*id)
            }
            MutationKind::Add(_) | MutationKind::Purchase => None,
        }
    }
}

/// Which user-facing operation a remote call belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Add,
    Toggle,
    Edit,
    Delete,
    Purchase,
    /// Fetching the new record after a successful purchase
    HistoryRefresh,
}

impl Operation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Load => "Could not load your grocery list.",
            Operation::Add => "Failed to add item. Please try again.",
            Operation::Toggle => "Error updating item. Reverting changes.",
            Operation::Edit => "Could not update item.",
            Operation::Delete => "Could not delete item. Restoring...",
            Operation::Purchase => "Purchase failed. Restoring cart items...",
            Operation::HistoryRefresh => "Purchase saved, but the history could not be refreshed.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Toggle => "toggle",
            Operation::Edit => "edit",
            Operation::Delete => "delete",
            Operation::Purchase => "purchase",
            Operation::HistoryRefresh => "history refresh",
        };
        f.write_str(name)
    }
}

/// What the remote store answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Created(Item),
    Updated(Item),
    Acknowledged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    kind: MutationKind,
    snapshot_before: Vec<Item>,
}

impl Mutation {
    pub fn new(kind: MutationKind, snapshot_before: Vec<Item>) -> Self {
        Self { kind, snapshot_before }
    }

    pub fn kind(&self) -> &MutationKind {
        &self.kind
    }

    pub fn operation(&self) -> Operation {
        self.kind.operation()
    }

    /// List as if the remote call had already succeeded
    pub fn apply(&self) -> Vec<Item> {
        let mut items = self.snapshot_before.clone();
        match &self.kind {
            // no id exists until the server assigns one
            MutationKind::Add(_) => {}
            MutationKind::Toggle(id) => {
                if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
                    item.added_to_cart = !item.added_to_cart;
                }
            }
            MutationKind::Edit(id, draft) => {
                if let Some(item) = items.iter_mut().find(|item| item.id == *id) {
                    item.name = draft.name.clone();
                    item.quantity = draft.quantity;
                }
            }
            MutationKind::Delete(id) => items.retain(|item| item.id != *id),
            MutationKind::Purchase => items.retain(|item| !item.added_to_cart),
        }
        items
    }

    /// Fold the server's answer into `current`, the latest store value
    pub fn reconcile(&self, mut current: Vec<Item>, confirmation: &Confirmation) -> Vec<Item> {
        match (&self.kind, confirmation) {
            (MutationKind::Add(_), Confirmation::Created(created)) => {
                if !current.iter().any(|item| item.id == created.id) {
                    current.insert(0, created.clone());
                }
            }
            (MutationKind::Edit(id, _), Confirmation::Updated(saved)) => {
                if let Some(item) = current.iter_mut().find(|item| item.id == *id) {
                    *item = saved.clone();
                }
            }
            _ => {}
        }
        current
    }

    /// Exact list from before the mutation
    pub fn rollback(self) -> Vec<Item> {
        self.snapshot_before
    }

    /// Collected items that a purchase moves into history, in list order
    pub fn purchased(&self) -> Vec<PurchasedItem> {
        self.snapshot_before
            .iter()
            .filter(|item| item.added_to_cart)
            .map(Item::snapshot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, name: &str, quantity: u32, cart: bool) -> Item {
        Item {
            id,
            name: name.to_string(),
            quantity,
            added_to_cart: cart,
        }
    }

    fn draft(name: &str, quantity: u32) -> ItemDraft {
        ItemDraft::parse(name, quantity).expect("valid draft")
    }

    fn cart_list() -> Vec<Item> {
        vec![
            item(1, "Milk", 2, true),
            item(2, "Bread", 1, false),
            item(3, "Apples", 3, true),
        ]
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mutation = Mutation::new(MutationKind::Toggle(2), cart_list());
        let applied = mutation.apply();
        assert!(applied[1].added_to_cart);
        assert_eq!(applied[0], cart_list()[0]);
        assert_eq!(applied[2], cart_list()[2]);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mutation = Mutation::new(MutationKind::Edit(2, draft("Rye bread", 5)), cart_list());
        let applied = mutation.apply();
        let ids: Vec<_> = applied.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(applied[1].name, "Rye bread");
        assert_eq!(applied[1].quantity, 5);
        assert!(!applied[1].added_to_cart);
    }

    #[test]
    fn test_edit_reconcile_uses_server_value() {
        let mutation = Mutation::new(MutationKind::Edit(2, draft("rye", 5)), cart_list());
        let saved = item(2, "Rye", 5, false);
        let reconciled = mutation.reconcile(mutation.apply(), &Confirmation::Updated(saved.clone()));
        assert_eq!(reconciled[1], saved);
        assert_eq!(reconciled.len(), 3);
    }

    #[test]
    fn test_add_reconcile_prepends_once() {
        let mutation = Mutation::new(MutationKind::Add(draft("Tea", 1)), cart_list());
        assert_eq!(mutation.apply(), cart_list());

        let created = item(9, "Tea", 1, false);
        let confirmation = Confirmation::Created(created.clone());
        let reconciled = mutation.reconcile(mutation.apply(), &confirmation);
        assert_eq!(reconciled[0], created);
        assert_eq!(reconciled.len(), 4);

        let again = mutation.reconcile(reconciled.clone(), &confirmation);
        assert_eq!(again, reconciled);
    }

    #[test]
    fn test_delete_rollback_restores_position() {
        let mutation = Mutation::new(MutationKind::Delete(2), cart_list());
        let applied = mutation.apply();
        assert_eq!(applied.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);

        let restored = mutation.rollback();
        assert_eq!(restored, cart_list());
        assert_eq!(restored[1].id, 2);
    }

    #[test]
    fn test_purchase_removes_collected() {
        let mutation = Mutation::new(MutationKind::Purchase, cart_list());
        assert_eq!(mutation.apply(), vec![item(2, "Bread", 1, false)]);
        assert_eq!(
            mutation.purchased(),
            vec![
                PurchasedItem { name: "Milk".into(), quantity: 2 },
                PurchasedItem { name: "Apples".into(), quantity: 3 },
            ]
        );
        assert_eq!(mutation.rollback(), cart_list());
    }

    #[test]
    fn test_operation_labels() {
        assert_eq!(MutationKind::Purchase.operation(), Operation::Purchase);
        assert_eq!(MutationKind::Delete(4).target(), Some(4));
        assert_eq!(Operation::HistoryRefresh.to_string(), "history refresh");
        assert!(Operation::Add.failure_message().contains("add item"));
    }
}
