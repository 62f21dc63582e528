//! Export model builder

use super::model::{ExportDocument, ExportModel, ExportableGoal, ExportableGoalGroup};
use crate::config::{ExportOptions, GoalGrouping, SCORE_PLACEHOLDER};
use crate::content::{GoalEntry, GoalSection, InputFieldPage};
use crate::error::{ExportError, Result};
use crate::types::Markup;
use tracing::{debug, warn};

/// Mean score of the assessed goals.
///
/// Unassessed goals count neither in the sum nor in the divisor. Fails
/// with [`ExportError::NoAssessedGoals`] when nothing was assessed.
pub fn compute_average_score<'a>(goals: impl IntoIterator<Item = &'a GoalEntry>) -> Result<f64> {
    let (sum, count) = goals
        .into_iter()
        .filter_map(GoalEntry::numeric_score)
        .fold((0.0, 0u32), |(sum, count), score| (sum + score, count + 1));

    if count == 0 {
        return Err(ExportError::NoAssessedGoals);
    }

    Ok(sum / f64::from(count))
}

/// Two-decimal score text, ties rounded away from zero (1.125 -> "1.13")
pub fn format_score(score: f64) -> String {
    format!("{:.2}", (score * 100.0).round() / 100.0)
}

/// Builds the export view of collected inputs and goal answers.
///
/// Constructed fresh for every export. Nothing is mutated after
/// construction, so every output is a pure function of the inputs.
#[derive(Debug, Clone)]
pub struct ExportBuilder {
    title: Markup,
    submit_enabled: bool,
    input_pages: Vec<InputFieldPage>,
    goals: GoalSection,
    options: ExportOptions,
    has_assessed_goals: bool,
    goal_groups: Option<Vec<ExportableGoalGroup>>,
}

impl ExportBuilder {
    /// Create a builder over a snapshot of collected content
    pub fn new(
        title: impl Into<Markup>,
        submit_enabled: bool,
        input_pages: Vec<InputFieldPage>,
        goals: GoalSection,
        options: ExportOptions,
    ) -> Self {
        let has_assessed_goals = goals.goals().any(GoalEntry::is_assessed);
        let goal_groups = group_goals(&goals, options.grouping);

        if !options.average_score_template.as_str().contains(SCORE_PLACEHOLDER) {
            warn!(
                "Average score template has no {} placeholder: {:?}",
                SCORE_PLACEHOLDER,
                options.average_score_template.as_str()
            );
        }

        debug!(
            input_pages = input_pages.len(),
            goal_pages = goals.pages.len(),
            has_assessed_goals,
            "Created export builder"
        );

        Self {
            title: title.into(),
            submit_enabled,
            input_pages,
            goals,
            options,
            has_assessed_goals,
            goal_groups,
        }
    }

    /// Export title
    pub fn title(&self) -> &Markup {
        &self.title
    }

    /// Whether the display page offers submitting
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Goal pages and section title
    pub fn goal_section(&self) -> &GoalSection {
        &self.goals
    }

    /// Input pages that take part in the export
    pub fn exported_input_pages(&self) -> impl Iterator<Item = &InputFieldPage> {
        self.input_pages.iter().filter(|page| page.has_fields())
    }

    /// Goal groups built at construction
    pub fn goal_groups(&self) -> Option<&[ExportableGoalGroup]> {
        self.goal_groups.as_deref()
    }

    /// Goal groups for the export, `None` when there are no goals
    pub fn build_goal_groups(&self) -> Option<Vec<ExportableGoalGroup>> {
        self.goal_groups.clone()
    }

    /// True iff at least one goal on any page was assessed
    pub fn has_assessed_goals(&self) -> bool {
        self.has_assessed_goals
    }

    /// Mean score over every goal section page
    pub fn average_score(&self) -> Result<f64> {
        compute_average_score(self.goals.goals())
    }

    /// Average score template with the score filled in, `None` without
    /// assessed goals
    pub fn average_score_text(&self) -> Option<Markup> {
        if !self.has_assessed_goals {
            return None;
        }

        let score = self.average_score().ok()?;
        Some(
            self.options
                .average_score_template
                .substitute(SCORE_PLACEHOLDER, &format_score(score)),
        )
    }

    /// Build the template-ready export object
    pub fn build_export_object(&self) -> ExportModel {
        ExportModel {
            title: self.title.clone(),
            goals_title: self.goals.title.clone(),
            input_pages: self.exported_input_pages().cloned().collect(),
            goal_groups: self.build_goal_groups(),
            average_score_text: self.average_score_text(),
        }
    }

    /// Build both artifacts for the display collaborator
    pub fn document(&self) -> ExportDocument {
        ExportDocument {
            title: self.title.clone(),
            html: self.render_full_export_html(),
            model: self.build_export_object(),
            submit_enabled: self.submit_enabled,
            labels: self.options.labels.clone(),
        }
    }
}

fn exportable(goal: &GoalEntry) -> ExportableGoal {
    ExportableGoal {
        text: goal.display_text(),
        comment: goal.comment.clone(),
    }
}

fn group_goals(section: &GoalSection, grouping: GoalGrouping) -> Option<Vec<ExportableGoalGroup>> {
    let groups: Vec<ExportableGoalGroup> = match grouping {
        GoalGrouping::Single => {
            let goals: Vec<_> = section.goals().map(exportable).collect();
            if goals.is_empty() {
                Vec::new()
            } else {
                vec![ExportableGoalGroup::unlabeled(goals)]
            }
        }
        GoalGrouping::PerPage => section
            .pages
            .iter()
            .filter(|page| !page.is_empty())
            .map(|page| ExportableGoalGroup::unlabeled(page.iter().map(exportable).collect()))
            .collect(),
    };

    if groups.is_empty() {
        None
    } else {
        Some(groups)
    }
}
