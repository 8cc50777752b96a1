//! Document store: a collection-based persistence contract with an
//! in-memory backend for tests. The MongoDB backend lives in the infra crate.

mod collection;
mod entity;
mod filter;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use collection::Collection;
pub use entity::{
    delete_entity, find_entities, find_entity, find_one_entity, insert_entity, list_entities,
    update_entity, Entity,
};
pub use filter::Filter;
pub use memory::InMemoryStore;
pub use store::{DocumentStore, SharedStore};
