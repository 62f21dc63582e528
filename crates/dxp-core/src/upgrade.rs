//! Upgrades of stored content parameters
//!
//! Content saved by an older release carries parameters in the layout of
//! that release. Each upgrade step is registered under the version that
//! introduced the new layout and is applied to content saved before it.

use crate::error::{ExportError, Result};
use crate::types::{Markup, ParamsVersion};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Metadata title used when stored content has none
pub const DEFAULT_METADATA_TITLE: &str = "Document Export Page (JGU)";

/// Content metadata kept next to the parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Fields this crate does not interpret
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

/// Extras passed along with the parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentExtras {
    #[serde(default)]
    pub metadata: ContentMetadata,
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

/// Stored parameters with their extras
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredContent {
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub extras: ContentExtras,
}

/// A single upgrade step
pub type UpgradeStep = fn(StoredContent) -> Result<StoredContent>;

/// Result of running the upgrades
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeOutcome {
    pub content: StoredContent,
    /// Version the content is now in
    pub version: ParamsVersion,
    /// Steps that were applied, in order
    pub applied: Vec<ParamsVersion>,
}

/// Registry of upgrade steps keyed by version
pub struct Upgrader {
    steps: BTreeMap<ParamsVersion, UpgradeStep>,
}

impl Upgrader {
    /// Create an upgrader with every known step
    pub fn new() -> Self {
        let mut upgrader = Self {
            steps: BTreeMap::new(),
        };
        upgrader.register(ParamsVersion::V1_4, move_title_to_metadata);
        upgrader
    }

    /// Register a step for `version`
    pub fn register(&mut self, version: ParamsVersion, step: UpgradeStep) {
        self.steps.insert(version, step);
    }

    /// Look up the step registered for a version
    pub fn step(&self, major: u32, minor: u32) -> Option<UpgradeStep> {
        self.steps.get(&ParamsVersion::new(major, minor)).copied()
    }

    /// Latest version any step upgrades to
    pub fn current_version(&self) -> ParamsVersion {
        self.steps
            .keys()
            .next_back()
            .copied()
            .unwrap_or(ParamsVersion::V1_4)
    }

    /// Check if content saved at `from` needs upgrading
    pub fn needs_upgrade(&self, from: ParamsVersion) -> bool {
        self.steps.keys().any(|version| *version > from)
    }

    /// Apply every step newer than `from`, oldest first
    pub fn upgrade(&self, from: ParamsVersion, content: StoredContent) -> Result<UpgradeOutcome> {
        let current = self.current_version();
        if !from.is_compatible(&current) {
            return Err(ExportError::UnsupportedVersion(format!(
                "{} (expected {}.x)",
                from, current.major
            )));
        }

        let mut content = content;
        let mut applied = Vec::new();
        for (version, step) in self.steps.range((
            std::ops::Bound::Excluded(from),
            std::ops::Bound::Unbounded,
        )) {
            debug!(%version, "Applying parameters upgrade");
            content = step(content).map_err(|e| e.with_context(format!("Upgrade to {}", version)))?;
            applied.push(*version);
        }

        Ok(UpgradeOutcome {
            content,
            version: applied.last().copied().unwrap_or(from),
            applied,
        })
    }
}

impl Default for Upgrader {
    fn default() -> Self {
        Self::new()
    }
}

/// 1.4: the title moved from the parameters into the content metadata,
/// as plain text.
fn move_title_to_metadata(mut content: StoredContent) -> Result<StoredContent> {
    let title = content
        .params
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty());

    let metadata = &mut content.extras.metadata;
    if let Some(title) = title {
        metadata.title = Some(Markup::new(title).strip_tags());
    } else if metadata.title.as_deref().map_or(true, str::is_empty) {
        metadata.title = Some(DEFAULT_METADATA_TITLE.to_string());
    }

    Ok(content)
}
