mod java;

pub use java::JavaParser;

use crate::error::ExtractError;

/// One top-level type declaration extracted from a source file at a
/// specific commit. Lives only for the duration of one file comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassUnit {
    /// Package-qualified type name, unique within one file's output
    pub qualified_name: String,
    /// Canonical rendering of the declaration, used only for equality
    pub body: String,
}

/// Capability interface over the language front-end. Keeping the
/// classifier generic over this lets tests feed canned units without a
/// real grammar.
pub trait SourceParser {
    /// Extract the top-level type declarations from one file's text, in
    /// declaration order. Fails only when no usable syntax tree can be
    /// produced at all; callers treat that as "no recognizable classes".
    fn extract_units(&self, source: &str) -> Result<Vec<ClassUnit>, ExtractError>;
}
