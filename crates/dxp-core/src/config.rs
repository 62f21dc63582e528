//! Configuration management for dxp

use crate::types::Markup;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the formatted average score
pub const SCORE_PLACEHOLDER: &str = "@score";

/// Default average score line
pub const DEFAULT_AVERAGE_SCORE: &str = "Average score: @score";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export settings
    pub export: ExportConfig,
    /// Localized strings
    pub l10n: L10n,
    /// Button labels handed to the display page
    pub labels: ButtonLabels,
}

/// How goals are collected into groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalGrouping {
    /// One unlabeled group holding every goal
    #[default]
    Single,
    /// One unlabeled group per non-empty goal page
    PerPage,
}

/// Export-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export format
    pub default_format: String,
    /// Goal grouping mode
    pub grouping: GoalGrouping,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "html".to_string(),
            grouping: GoalGrouping::Single,
        }
    }
}

/// Localized strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct L10n {
    /// Average score template, `@score` is replaced by the score
    pub average_score: Markup,
}

impl Default for L10n {
    fn default() -> Self {
        Self {
            average_score: Markup::new(DEFAULT_AVERAGE_SCORE),
        }
    }
}

/// Labels for the export page buttons. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonLabels {
    pub submit: String,
    pub submit_success: String,
    pub select_all: String,
    pub export: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            submit: "Submit".to_string(),
            submit_success: "Your report was submitted successfully!".to_string(),
            select_all: "Select all".to_string(),
            export: "Export".to_string(),
        }
    }
}

/// Params bag supplied by the host alongside the content.
///
/// Every field is optional; present values win over [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostParams {
    pub l10n: HostL10n,
    pub submit_text_label: Option<String>,
    pub submit_success_text_label: Option<String>,
    pub select_all_text_label: Option<String>,
    pub export_text_label: Option<String>,
}

/// Localized strings in the host params bag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostL10n {
    pub average_score: Option<Markup>,
}

/// Options used by a single export, resolved once at construction
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Average score template
    pub average_score_template: Markup,
    /// Goal grouping mode
    pub grouping: GoalGrouping,
    /// Button labels
    pub labels: ButtonLabels,
}

impl ExportOptions {
    /// Resolve options from configuration and optional host params
    pub fn resolve(config: &Config, params: Option<&HostParams>) -> Self {
        let mut options = Self::from(config);
        let Some(params) = params else {
            return options;
        };

        if let Some(template) = &params.l10n.average_score {
            options.average_score_template = template.clone();
        }

        let labels = &mut options.labels;
        for (target, value) in [
            (&mut labels.submit, &params.submit_text_label),
            (&mut labels.submit_success, &params.submit_success_text_label),
            (&mut labels.select_all, &params.select_all_text_label),
            (&mut labels.export, &params.export_text_label),
        ] {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        options
    }
}

impl From<&Config> for ExportOptions {
    fn from(config: &Config) -> Self {
        Self {
            average_score_template: config.l10n.average_score.clone(),
            grouping: config.export.grouping,
            labels: config.labels.clone(),
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
