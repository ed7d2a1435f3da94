//! Conversion of edit requests into Markdown fragments.
//!
//! Every fragment ends with exactly one trailing newline. User text is
//! inserted verbatim: nothing is escaped or validated as Markdown.

use super::syntax::{CodeLanguages, HeadingKind};
use super::table::Table;
use crate::{Error, Result};

/// Renders fragments using a fixed language allow-list.
#[derive(Debug, Clone, Default)]
pub struct FragmentRenderer {
    languages: CodeLanguages,
}

impl FragmentRenderer {
    /// Create a renderer that accepts the given code languages.
    pub fn new(languages: CodeLanguages) -> Self {
        Self { languages }
    }

    /// The code fence allow-list in use.
    pub fn languages(&self) -> &CodeLanguages {
        &self.languages
    }

    /// Render a heading. `None` produces the bare text with no marker.
    pub fn heading(&self, kind: Option<HeadingKind>, text: &str) -> String {
        let prefix = kind.map(HeadingKind::prefix).unwrap_or_default();
        format!("{prefix}{text}\n")
    }

    /// Render a paragraph. Surrounding whitespace is kept.
    pub fn paragraph(&self, text: &str) -> Result<String> {
        require_text(text, "paragraph")?;
        Ok(format!("{text}\n"))
    }

    /// Render a fenced code block.
    ///
    /// The body follows the opening fence after a single space and the
    /// closing fence is appended without a separator.
    pub fn code(&self, language: &str, body: &str) -> Result<String> {
        if !self.languages.contains(language) {
            return Err(Error::UnsupportedLanguage(language.to_string()));
        }
        Ok(format!("```{language}\n {body}```\n"))
    }

    /// Render a blockquote.
    pub fn blockquote(&self, text: &str) -> Result<String> {
        require_text(text, "blockquote")?;
        Ok(format!("> {text}\n"))
    }

    /// Render an inline link.
    pub fn link(&self, description: &str, url: &str) -> String {
        format!("[{description}]({url})\n")
    }

    /// Render an image.
    pub fn image(&self, description: &str, url: &str) -> String {
        format!("![{description}]({url})\n")
    }

    /// Render a pipe table.
    pub fn table(&self, table: &Table) -> String {
        table.render()
    }
}

fn require_text(text: &str, field: &'static str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn renderer() -> FragmentRenderer {
        FragmentRenderer::default()
    }

    #[test]
    fn test_heading_small() {
        assert_eq!(
            renderer().heading(Some(HeadingKind::Small), "My first header"),
            "### My first header\n"
        );
    }

    #[test]
    fn test_heading_medium_and_large() {
        let r = renderer();
        assert_eq!(r.heading(Some(HeadingKind::Medium), "Two"), "## Two\n");
        assert_eq!(r.heading(Some(HeadingKind::Large), "One"), "# One\n");
    }

    #[test]
    fn test_heading_unknown_kind_passes_through() {
        assert_eq!(renderer().heading(None, "plain"), "plain\n");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(
            renderer().paragraph("  keep my spaces ").unwrap(),
            "  keep my spaces \n"
        );
    }

    #[test]
    fn test_paragraph_empty() {
        let r = renderer();
        assert!(matches!(r.paragraph(""), Err(Error::EmptyInput("paragraph"))));
        assert!(matches!(
            r.paragraph(" \t\n "),
            Err(Error::EmptyInput("paragraph"))
        ));
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            renderer()
                .blockquote("This is an important Quote")
                .unwrap(),
            "> This is an important Quote\n"
        );
    }

    #[test]
    fn test_blockquote_empty() {
        let r = renderer();
        assert!(matches!(r.blockquote(""), Err(Error::EmptyInput("blockquote"))));
        assert!(matches!(
            r.blockquote("   "),
            Err(Error::EmptyInput("blockquote"))
        ));
    }

    #[test]
    fn test_code_supported() {
        let fragment = renderer().code("go", "x").unwrap();
        assert!(fragment.starts_with("```go\n"));
        assert_eq!(fragment, "```go\n x```\n");
    }

    #[test]
    fn test_code_unsupported() {
        let err = renderer().code("cobol", "x").unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(ref l) if l == "cobol"));
    }

    #[test]
    fn test_code_custom_allow_list() {
        let r = FragmentRenderer::new(CodeLanguages::new(["rust"]));
        assert!(r.code("rust", "fn main() {}").is_ok());
        assert!(r.code("go", "package main").is_err());
    }

    #[test]
    fn test_link() {
        assert_eq!(
            renderer().link("Go Dev", "https://go.dev/doc/"),
            "[Go Dev](https://go.dev/doc/)\n"
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            renderer().image("Metamask", "https://imgur.com/grhk1rU"),
            "![Metamask](https://imgur.com/grhk1rU)\n"
        );
    }

    #[test]
    fn test_table() {
        let mut values = HashMap::new();
        values.insert("c1".to_string(), vec!["value1".to_string()]);
        let t = Table::new(vec!["c1".to_string()], values);
        assert_eq!(renderer().table(&t), "|c1|\n| --- |\n|value1|\n");
    }
}
