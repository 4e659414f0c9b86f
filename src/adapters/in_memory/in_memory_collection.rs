// In memory implementation of the DocumentCollection port.
//
// Purpose
// - Support page tests and the local binary without a hosted document store.
//
// Responsibilities
// - Keep documents per collection and assign uuid v7 ids.
// - Stamp createdAt and updatedAt from a monotonic server clock.
// - Push the full ordered result set to every live listener after each mutation.
// - Prune listeners whose subscription was cancelled or dropped.

use crate::core::ports::{
    CollectionError, Direction, Document, DocumentCollection, Fields, OrderBy, Push,
    Subscription, SubscriptionError,
};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use tokio::sync::{Mutex, RwLock, mpsc};
use uuid::Uuid;

const OFFLINE: &str = "Document collection offline";

struct Listener {
    collection: String,
    order: OrderBy,
    sender: mpsc::UnboundedSender<Push>,
}

#[derive(Default)]
pub struct InMemoryDocumentCollection {
    documents: RwLock<HashMap<String, Vec<Document>>>,
    listeners: Mutex<Vec<Listener>>,
    last_timestamp: Mutex<i64>,
    is_offline: AtomicBool,
}

impl InMemoryDocumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, AtomicOrdering::SeqCst);
    }

    fn offline(&self) -> bool {
        self.is_offline.load(AtomicOrdering::SeqCst)
    }

    /// Stores a document exactly as given, without stamping timestamps.
    pub async fn put(&self, collection: &str, document: Document) {
        {
            let mut guard = self.documents.write().await;
            let documents = guard.entry(collection.to_string()).or_default();
            match documents.iter_mut().find(|d| d.id == document.id) {
                Some(existing) => *existing = document,
                None => documents.push(document),
            }
        }
        self.notify(collection).await;
    }

    /// Fails every live subscription with `message` and forgets them.
    pub async fn break_subscriptions(&self, message: &str) {
        let mut listeners = self.listeners.lock().await;
        for listener in listeners.drain(..) {
            let _ = listener
                .sender
                .send(Push::Failed(SubscriptionError::new(message)));
        }
        tracing::debug!(message, "broke every live subscription");
    }

    pub async fn active_subscriptions(&self) -> usize {
        let mut listeners = self.listeners.lock().await;
        listeners.retain(|listener| !listener.sender.is_closed());
        listeners.len()
    }

    pub async fn get(&self, collection: &str, id: &str) -> Option<Document> {
        self.documents
            .read()
            .await
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| d.id == id).cloned())
    }

    pub async fn len(&self, collection: &str) -> usize {
        self.documents
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    async fn now(&self) -> i64 {
        let mut last = self.last_timestamp.lock().await;
        let now = chrono::Utc::now().timestamp_millis().max(*last + 1);
        *last = now;
        now
    }

    async fn ordered(&self, collection: &str, order: &OrderBy) -> Vec<Document> {
        let guard = self.documents.read().await;
        let mut documents: Vec<Document> = guard
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| d.data.get(&order.field).is_some_and(|v| !v.is_null()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        documents.sort_by(|a, b| {
            let ordering = compare_values(&a.data[&order.field], &b.data[&order.field])
                .then_with(|| a.id.cmp(&b.id));
            match order.direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
        documents
    }

    async fn notify(&self, collection: &str) {
        let mut listeners = self.listeners.lock().await;
        listeners.retain(|listener| !listener.sender.is_closed());
        for listener in listeners.iter().filter(|l| l.collection == collection) {
            let snapshot = self.ordered(collection, &listener.order).await;
            let _ = listener.sender.send(Push::Snapshot(snapshot));
        }
    }
}

// Numbers before strings before anything else; same-kind values compare naturally.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (a, b) => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[async_trait::async_trait]
impl DocumentCollection for InMemoryDocumentCollection {
    async fn subscribe(&self, collection: &str, order: OrderBy) -> Subscription {
        let (sender, subscription) = Subscription::channel();
        if self.offline() {
            let _ = sender.send(Push::Failed(SubscriptionError::new(OFFLINE)));
            return subscription;
        }

        let snapshot = self.ordered(collection, &order).await;
        let _ = sender.send(Push::Snapshot(snapshot));
        self.listeners.lock().await.push(Listener {
            collection: collection.to_string(),
            order,
            sender,
        });
        subscription
    }

    async fn create(
        &self,
        collection: &str,
        mut fields: Fields,
    ) -> Result<String, CollectionError> {
        if self.offline() {
            return Err(CollectionError::Backend(OFFLINE.to_string()));
        }

        let id = Uuid::now_v7().to_string();
        let now = self.now().await;
        fields.insert("createdAt".to_string(), Value::from(now));
        fields.insert("updatedAt".to_string(), Value::from(now));
        self.documents
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                data: fields,
            });
        self.notify(collection).await;
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), CollectionError> {
        if self.offline() {
            return Err(CollectionError::Backend(OFFLINE.to_string()));
        }

        let now = self.now().await;
        {
            let mut guard = self.documents.write().await;
            let document = guard
                .get_mut(collection)
                .and_then(|documents| documents.iter_mut().find(|d| d.id == id))
                .ok_or_else(|| CollectionError::NotFound { id: id.to_string() })?;
            document.data.extend(fields);
            document
                .data
                .insert("updatedAt".to_string(), Value::from(now));
        }
        self.notify(collection).await;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), CollectionError> {
        if self.offline() {
            return Err(CollectionError::Backend(OFFLINE.to_string()));
        }

        {
            let mut guard = self.documents.write().await;
            let documents = guard
                .get_mut(collection)
                .ok_or_else(|| CollectionError::NotFound { id: id.to_string() })?;
            let before = documents.len();
            documents.retain(|d| d.id != id);
            if documents.len() == before {
                return Err(CollectionError::NotFound { id: id.to_string() });
            }
        }
        self.notify(collection).await;
        Ok(())
    }
}
