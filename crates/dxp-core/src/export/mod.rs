//! Export of collected inputs and goal answers
//!
//! This module builds the read-only export view shown before a learner
//! downloads or submits their report.
//!
//! # Overview
//!
//! [`ExportBuilder`] produces two artifacts from the same snapshot:
//! - an HTML fragment for inline display
//! - an [`ExportModel`] for filling document templates
//!
//! Exporters registered with [`ExportManager`] turn a builder into
//! `html`, `html-page`, `json` or `json-compact` output.
//!
//! # Example
//!
//! ```ignore
//! use dxp_core::export::{ExportBuilder, ExportManager};
//!
//! let builder = snapshot.into_builder(&config);
//! let html = builder.render_full_export_html();
//! let json = ExportManager::new().export(&builder, "json")?;
//! ```

mod builder;
mod exporter;
mod html;
mod json;
mod model;
mod render;

pub use builder::{compute_average_score, format_score, ExportBuilder};
pub use exporter::{ExportManager, Exporter};
pub use html::{HtmlExporter, HtmlPageExporter};
pub use json::JsonExporter;
pub use model::{ExportDocument, ExportModel, ExportableGoal, ExportableGoalGroup};
