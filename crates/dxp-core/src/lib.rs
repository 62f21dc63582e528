//! dxp-core - Core library for dxp
//!
//! This crate provides the export view of a document export page: it turns
//! collected input fields and self-assessment goal answers into an HTML
//! fragment and a template-ready export model, and upgrades stored
//! parameters from older releases.

pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod page;
pub mod types;
pub mod upgrade;

pub use error::{ExportError, Result};
pub use types::*;
