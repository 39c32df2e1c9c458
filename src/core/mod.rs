//! Core domain tags and library-wide error structures.

pub mod serialization;
pub mod types;

pub use types::*;

/// Errors surfaced by the analysis API.
///
/// Both variants abort a calculation before any result is produced: the
/// engine never returns a partially computed report. Degenerate-but-valid
/// numeric conditions (all-short strategies, collapsed sample ranges) are
/// well-defined results, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A required field is missing or empty.
    IncompleteInput(String),
    /// A field is present but malformed or outside its domain.
    InvalidInput(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteInput(msg) => write!(f, "incomplete input: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}
