//! Typed access on top of the untyped document contract

use bson::{oid::ObjectId, Document};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::StoreError;

use super::{Collection, DocumentStore, Filter};

/// A persisted domain model bound to its collection
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;

    fn id(&self) -> ObjectId;

    fn to_document(&self) -> Result<Document, StoreError> {
        Ok(bson::to_document(self)?)
    }

    fn from_document(document: Document) -> Result<Self, StoreError> {
        Ok(bson::from_document(document)?)
    }
}

pub async fn insert_entity<E: Entity>(
    store: &dyn DocumentStore,
    entity: &E,
) -> Result<(), StoreError> {
    store.insert(E::COLLECTION, vec![entity.to_document()?]).await?;
    Ok(())
}

pub async fn find_entity<E: Entity>(
    store: &dyn DocumentStore,
    id: &ObjectId,
) -> Result<E, StoreError> {
    E::from_document(store.find_by_id(E::COLLECTION, id).await?)
}

pub async fn find_one_entity<E: Entity>(
    store: &dyn DocumentStore,
    filter: &Filter,
) -> Result<E, StoreError> {
    E::from_document(store.find_one(E::COLLECTION, Some(filter)).await?)
}

pub async fn find_entities<E: Entity>(
    store: &dyn DocumentStore,
    filter: Option<&Filter>,
) -> Result<Vec<E>, StoreError> {
    store
        .find_all(E::COLLECTION, filter)
        .await?
        .into_iter()
        .map(E::from_document)
        .collect()
}

/// Like [`find_entities`] without a filter, but a collection that was never
/// written to lists as empty on every backend
pub async fn list_entities<E: Entity>(store: &dyn DocumentStore) -> Result<Vec<E>, StoreError> {
    match find_entities(store, None).await {
        Err(StoreError::UnknownCollection { .. }) => Ok(Vec::new()),
        other => other,
    }
}

pub async fn update_entity<E: Entity>(
    store: &dyn DocumentStore,
    id: &ObjectId,
    patch: Document,
) -> Result<E, StoreError> {
    E::from_document(store.update_by_id(E::COLLECTION, id, patch).await?)
}

pub async fn delete_entity<E: Entity>(
    store: &dyn DocumentStore,
    id: &ObjectId,
) -> Result<(), StoreError> {
    store.delete_by_id(E::COLLECTION, id).await
}
