//! Core type definitions for dxp

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Trusted markup supplied by a content author.
///
/// Titles, field descriptions, group labels and templates are authored
/// together with the content and are written to HTML verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap an author-supplied markup string
    pub fn new(s: impl Into<String>) -> Self {
        Markup(s.into())
    }

    /// Get the raw markup
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the markup is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace the first occurrence of `placeholder` with `value`.
    ///
    /// The value is inserted as markup, so callers must only pass values
    /// they produced themselves (formatted numbers, escaped text).
    pub fn substitute(&self, placeholder: &str, value: &str) -> Markup {
        Markup(self.0.replacen(placeholder, value, 1))
    }

    /// Remove everything that looks like a tag, including an unterminated
    /// trailing `<...`.
    pub fn strip_tags(&self) -> String {
        static TAG: OnceLock<Regex> = OnceLock::new();
        let re = TAG.get_or_init(|| Regex::new(r"<[^>]*>?").expect("static tag pattern"));
        re.replace_all(&self.0, "").into_owned()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Markup {
    fn from(s: &str) -> Self {
        Markup::new(s)
    }
}

impl From<String> for Markup {
    fn from(s: String) -> Self {
        Markup(s)
    }
}

/// Text typed by an end user.
///
/// Never rendered verbatim: the only way into HTML is through escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlainText(String);

impl PlainText {
    /// Wrap end-user text
    pub fn new(s: impl Into<String>) -> Self {
        PlainText(s.into())
    }

    /// Get the unescaped text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the text is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// HTML-escaped form, suitable for a text node or attribute
    pub fn escaped(&self) -> String {
        escape_html(&self.0)
    }

    /// HTML-escaped form with line breaks turned into `<br>`
    pub fn escaped_with_breaks(&self) -> String {
        let normalized = self.0.replace("\r\n", "\n").replace('\r', "\n");
        escape_html(&normalized).replace('\n', "<br>")
    }
}

impl fmt::Display for PlainText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlainText {
    fn from(s: &str) -> Self {
        PlainText::new(s)
    }
}

impl From<String> for PlainText {
    fn from(s: String) -> Self {
        PlainText(s)
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Version of stored content parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParamsVersion {
    pub major: u32,
    pub minor: u32,
}

impl ParamsVersion {
    pub const V1_4: Self = Self { major: 1, minor: 4 };

    /// Create a version
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a `major.minor` string
    pub fn parse(s: &str) -> crate::Result<Self> {
        let invalid = || crate::ExportError::InvalidVersion(s.to_string());
        let (major, minor) = s.trim().split_once('.').ok_or_else(invalid)?;
        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }

    /// Check if this version is compatible with another version
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for ParamsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_text_breaks() {
        let text = PlainText::new("line one\r\nline <two>\nthree");
        assert_eq!(
            text.escaped_with_breaks(),
            "line one<br>line &lt;two&gt;<br>three"
        );
        assert_eq!(text.escaped(), "line one\r\nline &lt;two&gt;\nthree");
    }

    #[test]
    fn test_markup_substitute_first_only() {
        let template = Markup::new("@score of @score");
        assert_eq!(template.substitute("@score", "3.00").as_str(), "3.00 of @score");
    }

    #[test]
    fn test_markup_substitute_without_placeholder() {
        let template = Markup::new("Average");
        assert_eq!(template.substitute("@score", "3.00").as_str(), "Average");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(Markup::new("<p>My <em>export</em></p>").strip_tags(), "My export");
        assert_eq!(Markup::new("Title <br").strip_tags(), "Title ");
        assert_eq!(Markup::new("plain").strip_tags(), "plain");
    }

    #[test]
    fn test_markup_serde_transparent() {
        let json = serde_json::to_string(&Markup::new("<b>x</b>")).unwrap();
        assert_eq!(json, "\"<b>x</b>\"");
        let text: PlainText = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(text.as_str(), "hi");
    }

    #[test]
    fn test_params_version_parse() {
        assert_eq!(ParamsVersion::parse("1.4").unwrap(), ParamsVersion::V1_4);
        assert_eq!(ParamsVersion::parse(" 1.3 ").unwrap(), ParamsVersion::new(1, 3));
        assert!(ParamsVersion::parse("1").is_err());
        assert!(ParamsVersion::parse("one.two").is_err());
    }

    #[test]
    fn test_params_version_ordering() {
        assert!(ParamsVersion::new(1, 3) < ParamsVersion::V1_4);
        assert!(ParamsVersion::new(1, 10) > ParamsVersion::V1_4);
        assert!(ParamsVersion::new(1, 0).is_compatible(&ParamsVersion::V1_4));
        assert!(!ParamsVersion::new(2, 0).is_compatible(&ParamsVersion::V1_4));
    }

    proptest! {
        #[test]
        fn escaped_text_has_no_raw_angle_brackets(s in ".*") {
            let escaped = PlainText::new(s).escaped_with_breaks().replace("<br>", "");
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
        }
    }
}
