pub mod handler;

pub use handler::{KeyValueStore, MemoryStore, SledStore};
