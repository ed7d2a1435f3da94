//! Fixed Markdown syntax tables.
//!
//! Heading markers are a closed set. Code fence languages come from an
//! allow-list that is built once at startup (usually from configuration)
//! and shared read-only afterwards.

use std::collections::BTreeSet;

/// Languages accepted for code fences when no configuration overrides them.
pub const DEFAULT_CODE_LANGUAGES: &[&str] = &["go", "java", "json"];

// ============================================================================
// Headings
// ============================================================================

/// Heading size requested by a client.
///
/// Wire names are `SMALL_HEADING`, `MEDIUM_HEADING` and `LARGE_HEADING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingKind {
    /// `### ` (H3)
    Small,
    /// `## ` (H2)
    Medium,
    /// `# ` (H1)
    Large,
}

impl HeadingKind {
    /// Look up a heading kind by its wire name.
    ///
    /// Unknown names yield `None`; callers render those without a marker.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SMALL_HEADING" => Some(Self::Small),
            "MEDIUM_HEADING" => Some(Self::Medium),
            "LARGE_HEADING" => Some(Self::Large),
            _ => None,
        }
    }

    /// The wire name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "SMALL_HEADING",
            Self::Medium => "MEDIUM_HEADING",
            Self::Large => "LARGE_HEADING",
        }
    }

    /// The Markdown marker, including its trailing space.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Small => "### ",
            Self::Medium => "## ",
            Self::Large => "# ",
        }
    }
}

// ============================================================================
// Code languages
// ============================================================================

/// Allow-list of code fence languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLanguages {
    allowed: BTreeSet<String>,
}

impl CodeLanguages {
    /// Build an allow-list from any collection of language tags.
    ///
    /// Tags are matched exactly; no case folding is applied.
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: languages.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `language` may be used in a code fence.
    pub fn contains(&self, language: &str) -> bool {
        self.allowed.contains(language)
    }

    /// Iterate the allowed tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// Number of allowed tags.
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Returns `true` if nothing is allowed.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl Default for CodeLanguages {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LANGUAGES.iter().copied())
    }
}
