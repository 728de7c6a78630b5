//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStore`] - In-memory key-value storage

pub mod http;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use store::InMemoryStore;
