//! The local vehicle registry.
//!
//! # Modules
//!
//! - `codec`: JSON encoding of the registry value
//! - `store`: Append-only registry persisted under one storage key
//! - `lister`: Listing state that reloads on every focus

pub mod codec;
pub mod lister;
pub mod store;

pub use lister::{ListingStatus, RegistryLister};
pub use store::{RegistryStore, REGISTRY_KEY};
