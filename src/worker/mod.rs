//! Registry worker for blocking storage operations.
//!
//! Registry reads and writes touch the filesystem, so the application never
//! performs them inline. It posts a [`WorkerMessage`] and gets a
//! [`WorkerResponse`] back; the runtime runs the worker on tokio's blocking
//! pool.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::RegistryWorker;
pub use messages::{WorkerMessage, WorkerResponse};
