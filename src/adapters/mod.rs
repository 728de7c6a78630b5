//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStore`] - JSON file key-value storage
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryStore`] - In-memory storage with failure injection

pub mod file_store;
pub mod mock;
pub mod reqwest_http;

pub use file_store::FileStore;
pub use mock::{InMemoryStore, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
