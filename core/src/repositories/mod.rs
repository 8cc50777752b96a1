//! Persistence contracts and backends available to the domain layer.

pub mod document;

pub use document::{
    delete_entity, find_entities, find_entity, find_one_entity, insert_entity, list_entities,
    update_entity, Collection, DocumentStore, Entity, Filter, InMemoryStore, SharedStore,
};
