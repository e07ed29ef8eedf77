//! Digital Library
//!
//! An in-memory book catalog with title/author search and a
//! one-book-per-user lending ledger, served over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// State owning a fresh, empty catalog
    pub fn new() -> Self {
        Self {
            services: Arc::new(services::Services::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
