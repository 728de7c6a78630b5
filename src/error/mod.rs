//! Error types for hubdeck.
//!
//! - [`ApiError`] - failures talking to the upstream GitHub API
//! - [`StoreError`] - failures reading or writing durable storage
//! - [`AppError`] - unified error used at the application edge
//!
//! Upstream failures are never shown to the operator in detail: views
//! display [`FETCH_ERROR_MESSAGE`] and the cause goes to the log.
//!
//! | Error | Shown as | Logged |
//! |-------|----------|--------|
//! | Login mismatch | Modal alert | info |
//! | Upstream fetch | Inline generic message | error |
//! | README fetch | "README não encontrado." | warn |
//! | Storage | Nothing | warn |

mod api;
mod app_error;
mod store;

pub use api::{ApiError, FETCH_ERROR_MESSAGE};
pub use app_error::{AppError, AppResult};
pub use store::StoreError;
