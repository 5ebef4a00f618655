//! Mutation Coordinator
//!
//! Sole writer of the item store and history cache. Every operation:
//! 1. snapshots the latest item list,
//! 2. installs the optimistic list synchronously,
//! 3. calls the remote store, then reconciles with the server's answer or
//!    restores the snapshot and reports the failure.
//!
//! Remote failures never escape: each call resolves to an [`Outcome`].

use std::fmt;

use futures::try_join;
use log::{debug, error, info, warn};

use crate::error::{RemoteError, ValidationError};
use crate::model::{HistoryRecord, Item, ItemDraft, ItemId};
use crate::mutation::{Confirmation, Mutation, MutationKind, Operation};
use crate::remote::GroceryRemote;
use crate::sequencer::Sequencer;
use crate::store::{HistoryCache, ItemStore};

/// A remote call that failed, with the operation it belonged to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationFailure {
    pub operation: Operation,
    pub error: RemoteError,
}

impl fmt::Display for MutationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation.failure_message())
    }
}

/// Why an operation did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankName,
    /// The target id is no longer in the list
    NotFound(ItemId),
    NothingCollected,
}

/// Result of one coordinator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Remote store confirmed; local state reconciled
    Committed,
    /// Remote call failed; pre-operation snapshot restored
    RolledBack(MutationFailure),
    Skipped(SkipReason),
    /// Invalid input, nothing changed
    Rejected(ValidationError),
}

impl Outcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed)
    }
}

type FailureHandler = Box<dyn Fn(&MutationFailure)>;

pub struct MutationCoordinator<R, I, H> {
    remote: R,
    items: I,
    history: H,
    sequencer: Sequencer,
    on_failure: Option<FailureHandler>,
}

impl<R, I, H> MutationCoordinator<R, I, H>
where
    R: GroceryRemote,
    I: ItemStore,
    H: HistoryCache,
{
    pub fn new(remote: R, items: I, history: H) -> Self {
        Self {
            remote,
            items,
            history,
            sequencer: Sequencer::default(),
            on_failure: None,
        }
    }

    /// Receive one notification per failed remote call
    pub fn with_failure_handler(mut self, handler: impl Fn(&MutationFailure) + 'static) -> Self {
        self.on_failure = Some(Box::new(handler));
        self
    }

    #[cfg(test)]
    pub(crate) fn remote(&self) -> &R {
        &self.remote
    }

    // ========================
    // Read Accessors
    // ========================

    pub fn items(&self) -> Vec<Item> {
        self.items.get()
    }

    pub fn history(&self) -> Vec<HistoryRecord> {
        self.history.get()
    }

    pub fn collected_count(&self) -> usize {
        self.items.get().iter().filter(|item| item.added_to_cart).count()
    }

    /// Purchase is only offered when something is collected
    pub fn can_purchase(&self) -> bool {
        self.collected_count() > 0
    }

    /// An operation on this item is pending
    pub fn is_in_flight(&self, id: ItemId) -> bool {
        self.sequencer.is_busy(id)
    }

    // ========================
    // Operations
    // ========================

    /// Initial load of both stores
    pub async fn load(&self) -> Outcome {
        match try_join!(self.remote.list_items(), self.remote.list_history()) {
            Ok((items, history)) => {
                info!("[SYNC] Loaded {} items, {} history records", items.len(), history.len());
                self.items.set(items);
                self.history.replace(history);
                Outcome::Committed
            }
            Err(err) => Outcome::RolledBack(self.report(Operation::Load, err)),
        }
    }

    /// Blank names are skipped without a remote call
    pub async fn add(&self, name: &str, quantity: u32) -> Outcome {
        match ItemDraft::parse(name, quantity) {
            Ok(draft) => self.run(MutationKind::Add(draft)).await,
            Err(ValidationError::EmptyName) => {
                debug!("[SYNC] add skipped: blank name");
                Outcome::Skipped(SkipReason::BlankName)
            }
            Err(err) => Outcome::Rejected(err),
        }
    }

    pub async fn toggle(&self, id: ItemId) -> Outcome {
        self.run(MutationKind::Toggle(id)).await
    }

    pub async fn edit(&self, id: ItemId, name: &str, quantity: u32) -> Outcome {
        match ItemDraft::parse(name, quantity) {
            Ok(draft) => self.run(MutationKind::Edit(id, draft)).await,
            Err(err) => {
                debug!("[SYNC] edit of {} rejected: {}", id, err);
                Outcome::Rejected(err)
            }
        }
    }

    pub async fn delete(&self, id: ItemId) -> Outcome {
        self.run(MutationKind::Delete(id)).await
    }

    pub async fn purchase(&self) -> Outcome {
        self.run(MutationKind::Purchase).await
    }

    // ========================
    // Protocol
    // ========================

    async fn run(&self, kind: MutationKind) -> Outcome {
        let lanes: Vec<ItemId> = match &kind {
            // every listed item plus any lane still busy, so a pending
            // toggle cannot flip what the server is about to buy
            MutationKind::Purchase => {
                let mut ids = listed_ids(&self.items.get());
                ids.extend(self.sequencer.busy_ids());
                ids
            }
            other => other.target().into_iter().collect(),
        };
        let _permits = self.sequencer.acquire_all(lanes).await;

        // snapshot
        let current = self.items.get();
        if let Some(reason) = precondition(&kind, &current) {
            debug!("[SYNC] {} skipped: {:?}", kind.operation(), reason);
            return Outcome::Skipped(reason);
        }
        let mutation = Mutation::new(kind, current);

        // optimistic apply
        if !matches!(mutation.kind(), MutationKind::Add(_)) {
            self.items.set(mutation.apply());
        }
        debug!("[SYNC] {} applied optimistically", mutation.operation());

        // confirm
        match self.confirm(mutation.kind()).await {
            Ok(confirmation) => {
                self.items.set(mutation.reconcile(self.items.get(), &confirmation));
                info!("[SYNC] {} committed", mutation.operation());
                if matches!(mutation.kind(), MutationKind::Purchase) {
                    self.refresh_history(mutation.purchased().len()).await;
                }
                Outcome::Committed
            }
            Err(err) => {
                let operation = mutation.operation();
                // Add changed nothing locally; restoring its snapshot would
                // undo whatever resolved while it was pending
                if !matches!(mutation.kind(), MutationKind::Add(_)) {
                    self.items.set(mutation.rollback());
                }
                warn!("[SYNC] {} rolled back", operation);
                Outcome::RolledBack(self.report(operation, err))
            }
        }
    }

    async fn confirm(&self, kind: &MutationKind) -> Result<Confirmation, RemoteError> {
        let confirmation = match kind {
            MutationKind::Add(draft) => Confirmation::Created(self.remote.create_item(draft).await?),
            MutationKind::Toggle(id) => {
                self.remote.toggle_item(*id).await?;
                Confirmation::Acknowledged
            }
            MutationKind::Edit(id, draft) => {
                Confirmation::Updated(self.remote.update_item(*id, draft).await?)
            }
            MutationKind::Delete(id) => {
                self.remote.delete_item(*id).await?;
                Confirmation::Acknowledged
            }
            MutationKind::Purchase => {
                self.remote.purchase().await?;
                Confirmation::Acknowledged
            }
        };
        Ok(confirmation)
    }

    /// Fetch the record the purchase created. Items stay committed even if
    /// this fails: the server already moved them.
    async fn refresh_history(&self, purchased: usize) {
        match self.remote.latest_history().await {
            Ok(Some(record)) => {
                info!("[SYNC] history record {} ({} of {} items)", record.timestamp, record.items.len(), purchased);
                self.history.prepend(record);
            }
            Ok(None) => warn!("[SYNC] purchase confirmed but no history record returned"),
            Err(err) => {
                self.report(Operation::HistoryRefresh, err);
            }
        }
    }

    fn report(&self, operation: Operation, error: RemoteError) -> MutationFailure {
        error!("[SYNC] {} failed: {}", operation, error);
        let failure = MutationFailure { operation, error };
        if let Some(handler) = &self.on_failure {
            handler(&failure);
        }
        failure
    }
}

fn listed_ids(items: &[Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id).collect()
}

fn precondition(kind: &MutationKind, items: &[Item]) -> Option<SkipReason> {
    match kind {
        MutationKind::Add(_) => None,
        MutationKind::Purchase => {
            (!items.iter().any(|item| item.added_to_cart)).then_some(SkipReason::NothingCollected)
        }
        other => other
            .target()
            .filter(|id| !items.iter().any(|item| item.id == *id))
            .map(SkipReason::NotFound),
    }
}
