//! HTML rendering of the export view
//!
//! Author markup (titles, descriptions, labels, the score line) is written
//! verbatim. Learner text only goes through [`PlainText`] escaping.
//!
//! [`PlainText`]: crate::types::PlainText

use super::builder::ExportBuilder;

impl ExportBuilder {
    /// Render the input field pages
    pub fn render_input_blocks_html(&self) -> String {
        let mut html = String::new();

        for page in self.exported_input_pages() {
            if !page.title.is_empty() {
                html.push_str(&format!("<h2>{}</h2>", page.title));
            }

            for field in &page.fields {
                html.push_str("<p>");
                if let Some(description) = field.description.as_ref().filter(|d| !d.is_empty()) {
                    html.push_str(&format!("<strong>{}</strong>", description));
                }
                html.push_str("</p>");
                html.push_str(&format!("<span>{}</span>", field.value.escaped()));
            }
        }

        html
    }

    /// Render the goals section, empty when there are no goals
    pub fn render_goals_html(&self) -> String {
        let Some(groups) = self.goal_groups() else {
            return String::new();
        };

        let mut html = String::new();

        if let Some(title) = self.goal_section().title.as_ref().filter(|t| !t.is_empty()) {
            html.push_str(&format!("<h2>{}</h2>", title));
        }

        for group in groups {
            if !group.label.is_empty() {
                html.push_str(&format!(
                    "<p class=\"category\"><strong>{}:</strong></p>",
                    group.label
                ));
            }

            html.push_str("<ul>");
            for goal in &group.goals {
                html.push_str("<li>");
                html.push_str(&format!("<div>{}</div>", goal.text.escaped_with_breaks()));
                if let Some(comment) = goal.comment.as_ref().filter(|c| !c.is_empty()) {
                    html.push_str(&format!(
                        "<div class=\"comment\">{}</div>",
                        comment.escaped_with_breaks()
                    ));
                }
                html.push_str("</li>");
            }
            html.push_str("</ul>");
        }

        if let Some(score_text) = self.average_score_text() {
            html.push_str(&format!("<p class=\"average-score\">{}</p>", score_text));
        }

        html
    }

    /// Render input blocks followed by the goals section
    pub fn render_full_export_html(&self) -> String {
        let mut html = self.render_input_blocks_html();
        html.push_str(&self.render_goals_html());
        html
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ExportOptions;
    use crate::content::{GoalEntry, GoalSection, InputField, InputFieldPage};
    use crate::export::ExportBuilder;
    use crate::types::Markup;
    use pretty_assertions::assert_eq;

    fn quiz(input_pages: Vec<InputFieldPage>, goals: GoalSection) -> ExportBuilder {
        ExportBuilder::new("Quiz", false, input_pages, goals, ExportOptions::default())
    }

    #[test]
    fn test_input_value_is_escaped() {
        let builder = quiz(
            vec![InputFieldPage::new(
                "Section A",
                vec![InputField::new(Some("Name".into()), "<b>Bob</b>")],
            )],
            GoalSection::default(),
        );

        let html = builder.render_full_export_html();
        assert_eq!(
            html,
            "<h2>Section A</h2><p><strong>Name</strong></p><span>&lt;b&gt;Bob&lt;/b&gt;</span>"
        );
        assert!(!html.contains("average-score"));
        assert_eq!(builder.build_export_object().average_score_text, None);
    }

    #[test]
    fn test_author_markup_is_not_escaped() {
        let builder = quiz(
            vec![InputFieldPage::new(
                "<em>Intro</em>",
                vec![InputField::new(Some("<u>Why?</u>".into()), "because")],
            )],
            GoalSection::default(),
        );

        let html = builder.render_input_blocks_html();
        assert!(html.contains("<h2><em>Intro</em></h2>"));
        assert!(html.contains("<strong><u>Why?</u></strong>"));
    }

    #[test]
    fn test_untitled_and_empty_pages() {
        let builder = quiz(
            vec![
                InputFieldPage::new("Skipped", Vec::new()),
                InputFieldPage::new("", vec![InputField::new(None, "x")]),
                InputFieldPage::new("Blank description", vec![InputField::new(Some("".into()), "y")]),
            ],
            GoalSection::default(),
        );

        let html = builder.render_input_blocks_html();
        assert!(!html.contains("Skipped"));
        assert_eq!(
            html,
            "<p></p><span>x</span><h2>Blank description</h2><p></p><span>y</span>"
        );
    }

    #[test]
    fn test_goals_without_goals_render_nothing() {
        let builder = quiz(
            Vec::new(),
            GoalSection::new(Some(Markup::new("Goals")), vec![Vec::new()]),
        );
        assert_eq!(builder.render_goals_html(), "");
    }

    #[test]
    fn test_goals_html_structure() {
        let builder = quiz(
            Vec::new(),
            GoalSection::new(
                Some(Markup::new("Goals")),
                vec![vec![
                    GoalEntry::new("Read <docs>"),
                    GoalEntry::new("Write")
                        .answered(3, "Done")
                        .comment("line 1\nline & 2"),
                ]],
            ),
        );

        assert_eq!(
            builder.render_goals_html(),
            concat!(
                "<h2>Goals</h2>",
                "<ul>",
                "<li><div>Read &lt;docs&gt;</div></li>",
                "<li><div>Write (Done)</div>",
                "<div class=\"comment\">line 1<br>line &amp; 2</div></li>",
                "</ul>",
                "<p class=\"average-score\">Average score: 3.00</p>",
            )
        );
    }

    #[test]
    fn test_goals_without_assessment_have_no_score_line() {
        let builder = quiz(
            Vec::new(),
            GoalSection::new(None, vec![vec![GoalEntry::new("Read").comment("")]]),
        );

        assert_eq!(builder.render_goals_html(), "<ul><li><div>Read</div></li></ul>");
    }

    #[test]
    fn test_full_export_concatenates_sections() {
        let builder = quiz(
            vec![InputFieldPage::new("A", vec![InputField::new(None, "v")])],
            GoalSection::new(None, vec![vec![GoalEntry::new("g").answered(1, "ok")]]),
        );

        let full = builder.render_full_export_html();
        assert_eq!(
            full,
            format!(
                "{}{}",
                builder.render_input_blocks_html(),
                builder.render_goals_html()
            )
        );
        assert!(full.ends_with("<p class=\"average-score\">Average score: 1.00</p>"));
    }
}
