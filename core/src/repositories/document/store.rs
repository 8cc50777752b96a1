//! Storage contract shared by every backend

use std::sync::Arc;

use async_trait::async_trait;
use bson::{oid::ObjectId, Document};

use crate::errors::StoreError;

use super::{Collection, Filter};

/// Shared handle to a document store backend
pub type SharedStore = Arc<dyn DocumentStore>;

/// Collection-based persistence operations
///
/// Backends must agree on filter semantics (exact-match AND) and on the
/// `NotFound` error for lookups and mutations that match nothing. The
/// in-memory backend additionally fails with `UnknownCollection` when a
/// collection has never been written to; the real backend treats such a
/// collection as empty. Callers must not rely on that difference outside tests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store one or more documents, assigning `_id` where missing.
    /// Returns the ids in insertion order.
    async fn insert(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<Vec<ObjectId>, StoreError>;

    /// All documents matching `filter`; `None` matches everything
    async fn find_all(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>, StoreError>;

    /// First document matching `filter`
    async fn find_one(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
    ) -> Result<Document, StoreError>;

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &ObjectId,
    ) -> Result<Document, StoreError> {
        self.find_one(collection, Some(&Filter::by_id(id))).await
    }

    /// Merge `patch` into the document with the given id and return the
    /// updated document. `_id` in the patch is ignored.
    async fn update_by_id(
        &self,
        collection: Collection,
        id: &ObjectId,
        patch: Document,
    ) -> Result<Document, StoreError>;

    /// Remove the document with the given id; a second delete fails with `NotFound`
    async fn delete_by_id(&self, collection: Collection, id: &ObjectId) -> Result<(), StoreError>;

    /// Release the underlying connection
    async fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
