// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the document collection, the auth provider and the durable key-value store as traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - In memory implementations live under adapters::in_memory.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{mpsc, watch};

pub type Fields = Map<String, Value>;

/// Reported when the store drops a stream without a failure push of its own.
pub const STREAM_CLOSED: &str = "subscription closed";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("document {id} not found")]
    NotFound { id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubscriptionError {
    pub message: String,
}

impl SubscriptionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Auth failures carry the provider's error code, e.g. `auth/invalid-credential`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}")]
pub struct AuthError {
    pub code: String,
}

impl AuthError {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage write failed: {0}")]
    Write(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Fields,
}

/// One delivery on a live subscription. A snapshot is always the complete,
/// ordered result set, never a delta.
#[derive(Debug, Clone, PartialEq)]
pub enum Push {
    Snapshot(Vec<Document>),
    Failed(SubscriptionError),
}

/// Handle on a live query. Cancelling (or dropping) closes the channel; the
/// store prunes closed senders and never delivers to them again.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<Push>,
}

impl Subscription {
    pub fn channel() -> (mpsc::UnboundedSender<Push>, Subscription) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (sender, Subscription { receiver })
    }

    /// Next push that is already delivered, without waiting. `Ok(None)` while
    /// nothing is pending, an error once the store has dropped the stream.
    pub fn try_next(&mut self) -> Result<Option<Push>, SubscriptionError> {
        match self.receiver.try_recv() {
            Ok(push) => Ok(Some(push)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SubscriptionError::new(STREAM_CLOSED)),
        }
    }

    /// Waits for the next push. Errors once the store has dropped the stream.
    pub async fn next(&mut self) -> Result<Push, SubscriptionError> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| SubscriptionError::new(STREAM_CLOSED))
    }

    pub fn cancel(mut self) {
        self.receiver.close();
    }
}

#[async_trait]
pub trait DocumentCollection: Send + Sync {
    async fn subscribe(&self, collection: &str, order: OrderBy) -> Subscription;
    async fn create(&self, collection: &str, fields: Fields) -> Result<String, CollectionError>;
    async fn update(&self, collection: &str, id: &str, fields: Fields)
    -> Result<(), CollectionError>;
    async fn delete(&self, collection: &str, id: &str) -> Result<(), CollectionError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The receiver holds the current user as soon as it is returned and
    /// observes every later transition.
    fn on_auth_state_change(&self) -> watch::Receiver<Option<User>>;
}

/// Durable key-value storage scoped to the device. Synchronous on purpose:
/// reads and writes happen inline on the UI thread.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
