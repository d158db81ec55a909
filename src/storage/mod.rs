//! Storage layer for device-local persistent data.
//!
//! The registry keeps its whole state under one key, so the storage layer is
//! a plain string key/value store.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage with fault injection

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::Storage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
