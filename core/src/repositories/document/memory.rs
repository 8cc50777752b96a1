//! In-memory document store used by tests and local runs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use crate::errors::StoreError;

use super::{Collection, DocumentStore, Filter};

/// In-memory backend
///
/// A collection exists once something has been inserted into it, even if
/// every document was later deleted. Reads and mutations against a
/// collection that never existed fail with `UnknownCollection`.
pub struct InMemoryStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<Document>>>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of documents currently held in `collection`
    pub async fn document_count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn has_id(document: &Document, id: &ObjectId) -> bool {
    matches!(document.get("_id"), Some(Bson::ObjectId(existing)) if existing == id)
}

fn passes(filter: Option<&Filter>, document: &Document) -> bool {
    filter.map_or(true, |f| f.matches(document))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<Vec<ObjectId>, StoreError> {
        let mut collections = self.collections.write().await;
        let stored = collections.entry(collection).or_default();

        let mut ids = Vec::with_capacity(documents.len());
        for mut document in documents {
            let id = match document.get("_id") {
                Some(Bson::ObjectId(id)) => *id,
                _ => {
                    let id = ObjectId::new();
                    document.insert("_id", id);
                    id
                }
            };
            ids.push(id);
            stored.push(document);
        }
        Ok(ids)
    }

    async fn find_all(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let stored = collections
            .get(&collection)
            .ok_or_else(|| StoreError::unknown_collection(collection.as_str()))?;

        Ok(stored
            .iter()
            .filter(|document| passes(filter, document))
            .cloned()
            .collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
    ) -> Result<Document, StoreError> {
        let collections = self.collections.read().await;
        let stored = collections
            .get(&collection)
            .ok_or_else(|| StoreError::unknown_collection(collection.as_str()))?;

        stored
            .iter()
            .find(|document| passes(filter, document))
            .cloned()
            .ok_or_else(|| StoreError::not_found(collection.as_str()))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: &ObjectId,
        patch: Document,
    ) -> Result<Document, StoreError> {
        let mut collections = self.collections.write().await;
        let stored = collections
            .get_mut(&collection)
            .ok_or_else(|| StoreError::unknown_collection(collection.as_str()))?;

        let document = stored
            .iter_mut()
            .find(|document| has_id(document, id))
            .ok_or_else(|| StoreError::not_found(collection.as_str()))?;

        for (field, value) in patch {
            if field != "_id" {
                document.insert(field, value);
            }
        }
        Ok(document.clone())
    }

    async fn delete_by_id(&self, collection: Collection, id: &ObjectId) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let stored = collections
            .get_mut(&collection)
            .ok_or_else(|| StoreError::unknown_collection(collection.as_str()))?;

        let position = stored
            .iter()
            .position(|document| has_id(document, id))
            .ok_or_else(|| StoreError::not_found(collection.as_str()))?;

        stored.remove(position);
        Ok(())
    }
}
