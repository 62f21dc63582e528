//! Collected content: input field pages and goal answers
//!
//! These types mirror what the host hands over after the learner has gone
//! through the preceding pages. Field names on the wire follow the host's
//! camelCase contract.

use crate::config::{Config, ExportOptions, HostParams};
use crate::export::ExportBuilder;
use crate::types::{Markup, PlainText};
use serde::{Deserialize, Deserializer, Serialize};

/// Wire value for a goal that was never answered
pub const UNANSWERED: i32 = -1;

/// A single free-text input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    /// Author-supplied description shown above the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Markup>,
    /// The text the learner typed
    #[serde(default)]
    pub value: PlainText,
}

impl InputField {
    pub fn new(description: Option<Markup>, value: impl Into<PlainText>) -> Self {
        Self {
            description,
            value: value.into(),
        }
    }
}

/// A page of input fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFieldPage {
    #[serde(default)]
    pub title: Markup,
    #[serde(
        default,
        rename = "inputArray",
        deserialize_with = "deserialize_present_fields"
    )]
    pub fields: Vec<InputField>,
}

// Hosts send `null` for fields that were removed from a page
fn deserialize_present_fields<'de, D>(deserializer: D) -> Result<Vec<InputField>, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = Option::<Vec<Option<InputField>>>::deserialize(deserializer)?;
    Ok(fields.into_iter().flatten().flatten().collect())
}

impl InputFieldPage {
    pub fn new(title: impl Into<Markup>, fields: Vec<InputField>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    /// Pages without fields are left out of every export
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Answer given to a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered(i32),
}

impl AnswerState {
    pub fn is_assessed(&self) -> bool {
        matches!(self, AnswerState::Answered(_))
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Answered(v) => Some(*v),
        }
    }
}

impl From<i32> for AnswerState {
    fn from(v: i32) -> Self {
        if v == UNANSWERED {
            AnswerState::Unanswered
        } else {
            AnswerState::Answered(v)
        }
    }
}

impl From<AnswerState> for i32 {
    fn from(state: AnswerState) -> Self {
        state.value().unwrap_or(UNANSWERED)
    }
}

/// A self-assessment goal and the learner's answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEntry {
    pub goal_text: PlainText,
    #[serde(default)]
    pub goal_answer: AnswerState,
    /// Human readable form of the answer, e.g. "Achieved"
    #[serde(default)]
    pub textual_answer: PlainText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<PlainText>,
    /// Explicit numeric score; the answer value is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl GoalEntry {
    /// Create an unanswered goal
    pub fn new(text: impl Into<PlainText>) -> Self {
        Self {
            goal_text: text.into(),
            ..Default::default()
        }
    }

    /// Record an answer
    pub fn answered(mut self, answer: i32, textual: impl Into<PlainText>) -> Self {
        self.goal_answer = AnswerState::from(answer);
        self.textual_answer = textual.into();
        self
    }

    /// Attach a comment
    pub fn comment(mut self, comment: impl Into<PlainText>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach an explicit score
    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn is_assessed(&self) -> bool {
        self.goal_answer.is_assessed()
    }

    /// Numeric score, only for assessed goals
    pub fn numeric_score(&self) -> Option<f64> {
        let answer = self.goal_answer.value()?;
        Some(self.score.unwrap_or(f64::from(answer)))
    }

    /// Text shown in the export: the goal, followed by the answer when assessed
    pub fn display_text(&self) -> PlainText {
        if self.is_assessed() {
            PlainText::new(format!("{} ({})", self.goal_text, self.textual_answer))
        } else {
            self.goal_text.clone()
        }
    }
}

/// Goals of one page
pub type GoalPage = Vec<GoalEntry>;

/// All goal pages and the section title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Markup>,
    #[serde(default, rename = "inputArray")]
    pub pages: Vec<GoalPage>,
}

impl GoalSection {
    pub fn new(title: Option<Markup>, pages: Vec<GoalPage>) -> Self {
        Self { title, pages }
    }

    /// Iterate over every goal across pages
    pub fn goals(&self) -> impl Iterator<Item = &GoalEntry> {
        self.pages.iter().flatten()
    }
}

/// Everything the host passes in for one export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    #[serde(default)]
    pub title: Markup,
    #[serde(default)]
    pub submit_enabled: bool,
    #[serde(default)]
    pub input_fields: Vec<InputFieldPage>,
    #[serde(default)]
    pub input_goals: GoalSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<HostParams>,
}

impl ContentSnapshot {
    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create a builder, resolving options against `config`
    pub fn into_builder(self, config: &Config) -> ExportBuilder {
        let options = ExportOptions::resolve(config, self.params.as_ref());
        ExportBuilder::new(
            self.title,
            self.submit_enabled,
            self.input_fields,
            self.input_goals,
            options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_answer_state_sentinel() {
        assert_eq!(AnswerState::from(-1), AnswerState::Unanswered);
        assert_eq!(AnswerState::from(0), AnswerState::Answered(0));
        assert_eq!(i32::from(AnswerState::Unanswered), -1);
        assert!(!AnswerState::Unanswered.is_assessed());
    }

    #[test]
    fn test_display_text_unanswered() {
        let goal = GoalEntry::new("Learn Rust");
        assert_eq!(goal.display_text().as_str(), "Learn Rust");
    }

    #[test]
    fn test_display_text_answered() {
        let goal = GoalEntry::new("Learn Rust").answered(2, "Achieved");
        assert_eq!(goal.display_text().as_str(), "Learn Rust (Achieved)");
    }

    #[test]
    fn test_numeric_score() {
        assert_eq!(GoalEntry::new("a").numeric_score(), None);
        assert_eq!(GoalEntry::new("a").score(5.0).numeric_score(), None);
        assert_eq!(GoalEntry::new("a").answered(3, "x").numeric_score(), Some(3.0));
        assert_eq!(
            GoalEntry::new("a").answered(0, "x").score(2.5).numeric_score(),
            Some(2.5)
        );
    }

    #[test]
    fn test_snapshot_from_host_json() {
        let json = r#"{
            "title": "<p>Quiz</p>",
            "submitEnabled": true,
            "inputFields": [
                {"title": "Section A", "inputArray": [{"description": "Name", "value": "Bob"}]},
                {"title": "", "inputArray": []}
            ],
            "inputGoals": {
                "title": "Goals",
                "inputArray": [[
                    {"goalText": "Read", "goalAnswer": -1},
                    {"goalText": "Write", "goalAnswer": 1, "textualAnswer": "Partly", "comment": "ok"}
                ]]
            },
            "params": {"l10n": {"averageScore": "Avg @score"}}
        }"#;

        let snapshot = ContentSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.title.as_str(), "<p>Quiz</p>");
        assert!(snapshot.submit_enabled);
        assert_eq!(snapshot.input_fields.len(), 2);
        assert!(!snapshot.input_fields[1].has_fields());
        assert_eq!(snapshot.input_goals.goals().count(), 2);

        let write = &snapshot.input_goals.pages[0][1];
        assert_eq!(write.goal_answer, AnswerState::Answered(1));
        assert_eq!(write.comment.as_ref().map(PlainText::as_str), Some("ok"));
    }

    #[test]
    fn test_null_input_fields_skipped() {
        let page: InputFieldPage = serde_json::from_str(
            r#"{"title": "Notes", "inputArray": [null, {"value": "kept"}, null]}"#,
        )
        .unwrap();
        assert_eq!(page.fields, vec![InputField::new(None, "kept")]);

        let page: InputFieldPage =
            serde_json::from_str(r#"{"title": "Empty", "inputArray": null}"#).unwrap();
        assert!(!page.has_fields());
    }

    #[test]
    fn test_snapshot_defaults() {
        let snapshot = ContentSnapshot::from_json("{}").unwrap();
        assert!(snapshot.input_fields.is_empty());
        assert!(snapshot.input_goals.pages.is_empty());
        assert!(snapshot.params.is_none());
        assert!(!snapshot.submit_enabled);
    }

    #[test]
    fn test_missing_goal_answer_is_unanswered() {
        let goal: GoalEntry = serde_json::from_str(r#"{"goalText": "x"}"#).unwrap();
        assert!(!goal.is_assessed());
    }
}
