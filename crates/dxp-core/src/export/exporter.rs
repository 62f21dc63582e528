//! Exporter trait and manager

use super::builder::ExportBuilder;
use crate::error::{ExportError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Trait for export formats
pub trait Exporter: Send + Sync {
    /// Export the builder's content to string
    fn export(&self, builder: &ExportBuilder) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        // Register default exporters
        manager.register(Box::new(super::html::HtmlExporter::new()));
        manager.register(Box::new(super::html::HtmlPageExporter::new()));
        manager.register(Box::new(super::json::JsonExporter::pretty()));
        manager.register(Box::new(super::json::JsonExporter::compact()));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Export to the specified format
    pub fn export(&self, builder: &ExportBuilder, format: &str) -> Result<String> {
        let exporter = self.get(format).ok_or_else(|| {
            ExportError::Validation(format!("Unknown export format: {}", format))
        })?;

        let output = exporter.export(builder)?;
        debug!(format, bytes = output.len(), "Exported content");
        Ok(output)
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportOptions;
    use crate::content::GoalSection;

    fn create_test_builder() -> ExportBuilder {
        ExportBuilder::new(
            "Quiz",
            false,
            Vec::new(),
            GoalSection::default(),
            ExportOptions::default(),
        )
    }

    struct TestExporter;

    impl Exporter for TestExporter {
        fn export(&self, _builder: &ExportBuilder) -> Result<String> {
            Ok("test export".to_string())
        }

        fn format_name(&self) -> &str {
            "test"
        }

        fn file_extension(&self) -> &str {
            "txt"
        }
    }

    #[test]
    fn test_export_manager_creation() {
        let manager = ExportManager::new();
        assert!(manager.has_format("html"));
        assert!(manager.has_format("html-page"));
        assert!(manager.has_format("json"));
        assert!(manager.has_format("json-compact"));
    }

    #[test]
    fn test_register_exporter() {
        let mut manager = ExportManager::new();
        manager.register(Box::new(TestExporter));
        assert!(manager.has_format("test"));

        let output = manager.export(&create_test_builder(), "test").unwrap();
        assert_eq!(output, "test export");
    }

    #[test]
    fn test_export_unknown_format() {
        let manager = ExportManager::new();
        let result = manager.export(&create_test_builder(), "docx");
        assert!(matches!(result, Err(ExportError::Validation(_))));
    }

    #[test]
    fn test_available_formats_sorted() {
        let manager = ExportManager::new();
        assert_eq!(
            manager.available_formats(),
            vec!["html", "html-page", "json", "json-compact"]
        );
    }

    #[test]
    fn test_file_extensions() {
        let manager = ExportManager::new();
        assert_eq!(manager.get("html-page").unwrap().file_extension(), "html");
        assert_eq!(manager.get("json-compact").unwrap().file_extension(), "json");
    }
}
