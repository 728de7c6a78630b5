//! hubdeck - a terminal dashboard for searching GitHub
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod markdown;
pub mod router;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod views;
pub mod widgets;
