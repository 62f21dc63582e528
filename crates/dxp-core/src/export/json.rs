//! JSON exporter for the export model

use super::builder::ExportBuilder;
use super::exporter::Exporter;
use crate::error::Result;

/// JSON exporter with compact mode support
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, builder: &ExportBuilder) -> Result<String> {
        let model = builder.build_export_object();

        let json = if self.pretty {
            serde_json::to_string_pretty(&model)?
        } else {
            serde_json::to_string(&model)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportOptions;
    use crate::content::{GoalEntry, GoalSection, InputField, InputFieldPage};
    use crate::export::ExportModel;
    use crate::types::Markup;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn create_test_builder() -> ExportBuilder {
        ExportBuilder::new(
            "Quiz",
            true,
            vec![
                InputFieldPage::new("Section A", vec![InputField::new(Some("Name".into()), "Bob")]),
                InputFieldPage::new("Empty", Vec::new()),
            ],
            GoalSection::new(
                Some(Markup::new("Goals")),
                vec![vec![
                    GoalEntry::new("Read").answered(4, "Yes").comment("daily"),
                    GoalEntry::new("Write"),
                ]],
            ),
            ExportOptions::default(),
        )
    }

    #[test]
    fn test_json_exporter_names() {
        assert_eq!(JsonExporter::pretty().format_name(), "json");
        assert_eq!(JsonExporter::compact().format_name(), "json-compact");
    }

    #[test]
    fn test_json_model_shape() {
        let json = JsonExporter::compact().export(&create_test_builder()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Quiz",
                "goalsTitle": "Goals",
                "inputPages": [
                    {"title": "Section A", "inputArray": [{"description": "Name", "value": "Bob"}]}
                ],
                "goalGroups": [
                    {"label": "", "goals": [
                        {"text": "Read (Yes)", "comment": "daily"},
                        {"text": "Write"}
                    ]}
                ],
                "averageScoreText": "Average score: 4.00"
            })
        );
    }

    #[test]
    fn test_json_omits_absent_values() {
        let builder = ExportBuilder::new(
            "Quiz",
            false,
            Vec::new(),
            GoalSection::default(),
            ExportOptions::default(),
        );
        let json = JsonExporter::compact().export(&builder).unwrap();
        assert_eq!(json, r#"{"title":"Quiz","inputPages":[]}"#);
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let builder = create_test_builder();
        let json = JsonExporter::pretty().export(&builder).unwrap();
        assert!(json.contains('\n'));

        let model: ExportModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, builder.build_export_object());
    }
}
