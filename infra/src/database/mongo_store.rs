//! MongoDB implementation of the `DocumentStore` contract.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use futures_util::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use mule_core::errors::StoreError;
use mule_core::repositories::{Collection, DocumentStore, Filter};

use super::MongoConnection;

/// Document store backed by a live MongoDB database.
///
/// Collections are created on first write. Reading a collection that was
/// never written to yields an empty result rather than `UnknownCollection`.
pub struct MongoDocumentStore {
    connection: MongoConnection,
}

impl MongoDocumentStore {
    pub fn new(connection: MongoConnection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &MongoConnection {
        &self.connection
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.connection.database().collection(collection.as_str())
    }
}

fn backend(collection: Collection, operation: &str, err: mongodb::error::Error) -> StoreError {
    tracing::error!(
        collection = %collection,
        operation = operation,
        error = %err,
        "MongoDB operation failed"
    );
    StoreError::backend(err)
}

fn to_query(filter: Option<&Filter>) -> Document {
    filter.map(|f| f.as_document().clone()).unwrap_or_default()
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn insert(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<Vec<ObjectId>, StoreError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        // Ids are assigned here so the returned order matches the input order
        let mut ids = Vec::with_capacity(documents.len());
        let documents: Vec<Document> = documents
            .into_iter()
            .map(|mut document| {
                let id = match document.get("_id") {
                    Some(Bson::ObjectId(id)) => *id,
                    _ => {
                        let id = ObjectId::new();
                        document.insert("_id", id);
                        id
                    }
                };
                ids.push(id);
                document
            })
            .collect();

        self.collection(collection)
            .insert_many(documents, None)
            .await
            .map_err(|e| backend(collection, "insert", e))?;

        Ok(ids)
    }

    async fn find_all(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection(collection)
            .find(to_query(filter), None)
            .await
            .map_err(|e| backend(collection, "find", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| backend(collection, "find", e))
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
    ) -> Result<Document, StoreError> {
        self.collection(collection)
            .find_one(to_query(filter), None)
            .await
            .map_err(|e| backend(collection, "find_one", e))?
            .ok_or_else(|| StoreError::not_found(collection.as_str()))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: &ObjectId,
        mut patch: Document,
    ) -> Result<Document, StoreError> {
        patch.remove("_id");
        if patch.is_empty() {
            // `$set: {}` is rejected by the server
            return self.find_by_id(collection, id).await;
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection(collection)
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": patch }, options)
            .await
            .map_err(|e| backend(collection, "update", e))?
            .ok_or_else(|| StoreError::not_found(collection.as_str()))
    }

    async fn delete_by_id(&self, collection: Collection, id: &ObjectId) -> Result<(), StoreError> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": *id }, None)
            .await
            .map_err(|e| backend(collection, "delete", e))?;

        if result.deleted_count == 0 {
            return Err(StoreError::not_found(collection.as_str()));
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.connection.close().await;
        Ok(())
    }
}
