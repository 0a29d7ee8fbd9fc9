//! Prompt templates
//!
//! Templates are plain UTF-8 files containing literal placeholder markers.
//! [`PromptLoader`] reads them from the configured prompts directory and
//! [`render`] performs the placeholder substitution. Templates are read once
//! per invocation and never cached.

mod loader;
mod render;

pub use loader::{PromptError, PromptLoader};
pub use render::render;

/// Placeholder marker for the OCR text in the clean template
pub const MARKER_OCR: &str = "{{texto_ocr}}";

/// Placeholder marker for the first document in the comparison templates
pub const MARKER_TEXT_A: &str = "{{texto_a}}";

/// Placeholder marker for the second document in the comparison templates
pub const MARKER_TEXT_B: &str = "{{texto_b}}";

/// The three prompt template kinds, one per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// OCR text cleanup
    CleanText,
    /// High-level document comparison
    QuickComparison,
    /// Line-by-line document comparison
    DetailedComparison,
}

impl TemplateKind {
    /// File name of this template inside the prompts directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::CleanText => "clean_text.txt",
            Self::QuickComparison => "quick_comparison.txt",
            Self::DetailedComparison => "detailed_comparison.txt",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CleanText => "clean-text",
            Self::QuickComparison => "quick-comparison",
            Self::DetailedComparison => "detailed-comparison",
        };
        write!(f, "{}", name)
    }
}
