//! Storage backends for entity services

pub mod in_memory;

pub use in_memory::InMemoryEntityService;
