//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations against the upstream API
//! - [`KeyValueStore`] - Durable key-value storage for the session and the
//!   last viewed profile

pub mod http;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::{keys, KeyValueStore};
