//! Export data model handed to display and document templates

use crate::config::ButtonLabels;
use crate::content::InputFieldPage;
use crate::types::{Markup, PlainText};
use serde::{Deserialize, Serialize};

/// A goal as it appears in the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportableGoal {
    /// Goal text, with the textual answer appended when assessed
    pub text: PlainText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<PlainText>,
}

/// A labeled collection of goals rendered together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportableGoalGroup {
    /// Category label, empty for the unlabeled group
    #[serde(default)]
    pub label: Markup,
    pub goals: Vec<ExportableGoal>,
}

impl ExportableGoalGroup {
    /// Create a group without a label
    pub fn unlabeled(goals: Vec<ExportableGoal>) -> Self {
        Self {
            label: Markup::default(),
            goals,
        }
    }
}

/// Normalized, template-ready export object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportModel {
    pub title: Markup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_title: Option<Markup>,
    /// Input pages with at least one field
    #[serde(default)]
    pub input_pages: Vec<InputFieldPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_groups: Option<Vec<ExportableGoalGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_score_text: Option<Markup>,
}

/// Both export artifacts plus the values the display page passes through
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    pub title: Markup,
    /// HTML fragment for inline display
    pub html: String,
    /// Data object for document templates
    pub model: ExportModel,
    pub submit_enabled: bool,
    pub labels: ButtonLabels,
}
