use crate::core::ports::{
    CollectionError, Document, DocumentCollection, Fields, OrderBy, Push, Subscription,
};
use async_trait::async_trait;

const READ_ONLY: &str = "Closing collection is read only";

/// Delivers one snapshot per subscription, then drops the stream without a failure push.
pub struct ClosingCollection {
    documents: Vec<Document>,
}

impl ClosingCollection {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl DocumentCollection for ClosingCollection {
    async fn subscribe(&self, _collection: &str, _order: OrderBy) -> Subscription {
        let (sender, subscription) = Subscription::channel();
        let _ = sender.send(Push::Snapshot(self.documents.clone()));
        subscription
    }

    async fn create(&self, _collection: &str, _fields: Fields) -> Result<String, CollectionError> {
        Err(CollectionError::Backend(READ_ONLY.to_string()))
    }

    async fn update(
        &self,
        _collection: &str,
        _id: &str,
        _fields: Fields,
    ) -> Result<(), CollectionError> {
        Err(CollectionError::Backend(READ_ONLY.to_string()))
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), CollectionError> {
        Err(CollectionError::Backend(READ_ONLY.to_string()))
    }
}
