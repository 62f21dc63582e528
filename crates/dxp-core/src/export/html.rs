//! HTML exporters

use super::builder::ExportBuilder;
use super::exporter::Exporter;
use crate::error::Result;
use crate::types::Markup;

const PAGE_CSS: &str = "\
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; line-height: 1.5; }
.comment { color: #555; font-style: italic; margin-left: 1rem; }
.average-score { font-weight: bold; }
";

/// Plain `<title>` text from author markup.
///
/// Tags are dropped and entities kept as authored, so only a stray `>` left
/// behind by tag stripping needs escaping.
fn title_text(title: &Markup) -> String {
    title.strip_tags().replace('<', "&lt;").replace('>', "&gt;")
}

/// The inline HTML fragment
pub struct HtmlExporter;

impl HtmlExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for HtmlExporter {
    fn export(&self, builder: &ExportBuilder) -> Result<String> {
        Ok(builder.render_full_export_html())
    }

    fn format_name(&self) -> &str {
        "html"
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// A standalone HTML document wrapping the fragment
pub struct HtmlPageExporter {
    /// Include the inline stylesheet
    include_style: bool,
}

impl HtmlPageExporter {
    pub fn new() -> Self {
        Self {
            include_style: true,
        }
    }

    /// Set whether to include the inline stylesheet
    pub fn with_style(mut self, include: bool) -> Self {
        self.include_style = include;
        self
    }
}

impl Default for HtmlPageExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for HtmlPageExporter {
    fn export(&self, builder: &ExportBuilder) -> Result<String> {
        let title = builder.title();
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", title_text(title)));
        if self.include_style {
            html.push_str("<style>\n");
            html.push_str(PAGE_CSS);
            html.push_str("</style>\n");
        }
        html.push_str("</head>\n<body>\n");

        if !title.is_empty() {
            html.push_str(&format!("<h1>{}</h1>\n", title));
        }
        html.push_str("<div class=\"textfields-output\">");
        html.push_str(&builder.render_input_blocks_html());
        html.push_str("</div>\n");

        let goals = builder.render_goals_html();
        if !goals.is_empty() {
            html.push_str("<div class=\"goals-output\">");
            html.push_str(&goals);
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    fn format_name(&self) -> &str {
        "html-page"
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}
