// Remote collection sync keeps one page's local copy of the spots collection.
//
// Purpose
// - Own at most one live subscription and swap the snapshot wholesale on every push.
//
// Responsibilities
// - start cancels any previous subscription before subscribing again.
// - A failed push, or a stream the store drops, keeps the last good snapshot and marks
//   the sync as failed. No retry.
// - Decoding goes through Spot::from_document, which never fails.

use crate::core::ports::{DocumentCollection, OrderBy, Push, Subscription, SubscriptionError};
use crate::core::spot::model::Spot;
use std::sync::Arc;

pub const ORDER_FIELD: &str = "createdAt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// No subscription was requested yet, or it was stopped.
    Idle,
    /// Subscribed, waiting for the first snapshot.
    Loading,
    Live,
    Failed(String),
}

pub struct CollectionSync<C: DocumentCollection> {
    collection: Arc<C>,
    name: String,
    order: OrderBy,
    subscription: Option<Subscription>,
    snapshot: Arc<Vec<Spot>>,
    status: SyncStatus,
    loaded: bool,
}

impl<C: DocumentCollection> CollectionSync<C> {
    pub fn new(collection: Arc<C>, name: impl Into<String>) -> Self {
        Self {
            collection,
            name: name.into(),
            order: OrderBy::descending(ORDER_FIELD),
            subscription: None,
            snapshot: Arc::new(Vec::new()),
            status: SyncStatus::Idle,
            loaded: false,
        }
    }

    pub fn collection(&self) -> &Arc<C> {
        &self.collection
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn start(&mut self) {
        self.stop();
        self.status = SyncStatus::Loading;
        let subscription = self
            .collection
            .subscribe(&self.name, self.order.clone())
            .await;
        self.subscription = Some(subscription);
        tracing::debug!(collection = %self.name, "subscribed");
    }

    /// Cancels the live subscription, keeping the snapshot.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            tracing::debug!(collection = %self.name, "subscription cancelled");
        }
        if !self.is_failed() {
            self.status = SyncStatus::Idle;
        }
    }

    /// Cancels the subscription and forgets everything it delivered.
    pub fn clear(&mut self) {
        self.stop();
        self.snapshot = Arc::new(Vec::new());
        self.status = SyncStatus::Idle;
        self.loaded = false;
    }

    pub fn apply(&mut self, push: Push) {
        match push {
            Push::Snapshot(documents) => {
                let spots: Vec<Spot> = documents.into_iter().map(Spot::from_document).collect();
                tracing::debug!(collection = %self.name, spots = spots.len(), "snapshot received");
                self.snapshot = Arc::new(spots);
                self.status = SyncStatus::Live;
                self.loaded = true;
            }
            Push::Failed(err) => {
                tracing::error!(collection = %self.name, error = %err, "subscription failed");
                if let Some(subscription) = self.subscription.take() {
                    subscription.cancel();
                }
                self.status = SyncStatus::Failed(err.message);
            }
        }
    }

    /// Applies every push that is already delivered. Returns how many were applied.
    /// A stream the store dropped counts as a failure push.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(subscription) = self.subscription.as_mut() {
            match subscription.try_next() {
                Ok(Some(push)) => self.apply(push),
                Ok(None) => break,
                Err(err) => self.close(err),
            }
            applied += 1;
        }
        applied
    }

    /// Waits for the next push and applies it. `false` when there is nothing to wait on.
    pub async fn next(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };
        match subscription.next().await {
            Ok(push) => self.apply(push),
            Err(err) => self.close(err),
        }
        true
    }

    fn close(&mut self, err: SubscriptionError) {
        tracing::warn!(collection = %self.name, "subscription closed by the store");
        self.apply(Push::Failed(err));
    }

    pub fn snapshot(&self) -> Arc<Vec<Spot>> {
        Arc::clone(&self.snapshot)
    }

    pub fn spots(&self) -> &[Spot] {
        &self.snapshot
    }

    pub fn find(&self, id: &str) -> Option<&Spot> {
        self.snapshot.iter().find(|spot| spot.id == id)
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    /// At least one snapshot arrived since the last `clear`.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, SyncStatus::Failed(_))
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}
